//! Chart state: the generated month and the visible slice of it.

use crate::config::ProfileConfig;
use crate::profile::{HourlyLoadRecord, PREVIEW_HOURS, ProfileSummary};

/// Which part of the month is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Every hour of the month.
    Month,
    /// One week, by zero-based index.
    Week(usize),
}

/// TUI application state.
pub struct App {
    /// Active configuration.
    pub config: ProfileConfig,
    /// Preset name shown in the header.
    pub label: String,
    /// Generated records for the active configuration.
    pub records: Vec<HourlyLoadRecord>,
    /// Summary of `records`.
    pub summary: ProfileSummary,
    /// Visible range.
    pub view: View,
    /// Whether the user requested quit.
    pub quit: bool,
    /// Last generation error, shown in place of the chart.
    pub error: Option<String>,
}

impl App {
    /// Creates the app and generates the first profile.
    pub fn new(config: ProfileConfig, label: &str) -> Self {
        let mut app = Self {
            config,
            label: label.to_string(),
            records: Vec::new(),
            summary: ProfileSummary::from_records(&[]),
            view: View::Week(0),
            quit: false,
            error: None,
        };
        app.regenerate();
        app
    }

    /// Re-runs generation for the active configuration.
    ///
    /// An unseeded configuration draws fresh noise each time.
    pub fn regenerate(&mut self) {
        match self.config.build().and_then(|req| req.generate()) {
            Ok(records) => {
                self.summary = ProfileSummary::from_records(&records);
                self.records = records;
                self.error = None;
            }
            Err(e) => {
                self.records.clear();
                self.summary = ProfileSummary::from_records(&[]);
                self.error = Some(e.to_string());
            }
        }
        self.clamp_week();
    }

    /// Number of (possibly partial) weeks in the month.
    pub fn week_count(&self) -> usize {
        self.records.len().div_ceil(PREVIEW_HOURS).max(1)
    }

    /// Advances the week view, switching out of month view.
    pub fn next_week(&mut self) {
        self.view = match self.view {
            View::Month => View::Week(0),
            View::Week(w) => View::Week((w + 1).min(self.week_count() - 1)),
        };
    }

    /// Steps the week view back, switching out of month view.
    pub fn prev_week(&mut self) {
        self.view = match self.view {
            View::Month => View::Week(0),
            View::Week(w) => View::Week(w.saturating_sub(1)),
        };
    }

    /// Toggles between the whole month and the first week.
    pub fn toggle_month(&mut self) {
        self.view = match self.view {
            View::Month => View::Week(0),
            View::Week(_) => View::Month,
        };
    }

    /// Swaps schedule, load and noise for a preset's, keeping the month.
    ///
    /// Unknown names are ignored.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(mut config) = ProfileConfig::from_preset(name) else {
            return;
        };
        config.calendar = self.config.calendar.clone();
        self.config = config;
        self.label = name.to_string();
        self.view = View::Week(0);
        self.regenerate();
    }

    /// Records in the current view.
    pub fn visible(&self) -> &[HourlyLoadRecord] {
        match self.view {
            View::Month => &self.records,
            View::Week(w) => {
                let lo = (w * PREVIEW_HOURS).min(self.records.len());
                let hi = (lo + PREVIEW_HOURS).min(self.records.len());
                &self.records[lo..hi]
            }
        }
    }

    /// Header text for the current view.
    pub fn view_label(&self) -> String {
        match self.view {
            View::Month => "month".to_string(),
            View::Week(w) => format!("week {}/{}", w + 1, self.week_count()),
        }
    }

    fn clamp_week(&mut self) {
        if let View::Week(w) = self.view {
            self.view = View::Week(w.min(self.week_count() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        let mut cfg = ProfileConfig::office();
        cfg.calendar.year = 2024;
        cfg.calendar.month = 2;
        cfg.noise.random_pct = 0.0;
        App::new(cfg, "office")
    }

    #[test]
    fn new_app_generates_month() {
        let app = make_app();
        assert_eq!(app.records.len(), 29 * 24);
        assert_eq!(app.summary.hours, 29 * 24);
        assert!(app.error.is_none());
        assert_eq!(app.view, View::Week(0));
        assert_eq!(app.visible().len(), PREVIEW_HOURS);
    }

    #[test]
    fn week_navigation_is_clamped() {
        let mut app = make_app();
        // 696 hours -> 4 full weeks plus 24 hours
        assert_eq!(app.week_count(), 5);
        for _ in 0..10 {
            app.next_week();
        }
        assert_eq!(app.view, View::Week(4));
        assert_eq!(app.visible().len(), 24);
        for _ in 0..10 {
            app.prev_week();
        }
        assert_eq!(app.view, View::Week(0));
    }

    #[test]
    fn toggle_month_shows_everything() {
        let mut app = make_app();
        app.toggle_month();
        assert_eq!(app.view, View::Month);
        assert_eq!(app.visible().len(), app.records.len());
        assert_eq!(app.view_label(), "month");
        app.toggle_month();
        assert_eq!(app.view_label(), "week 1/5");
    }

    #[test]
    fn switch_preset_keeps_month() {
        let mut app = make_app();
        app.next_week();
        app.switch_preset("night_shift");
        assert_eq!(app.label, "night_shift");
        assert_eq!(app.config.calendar.year, 2024);
        assert_eq!(app.config.calendar.month, 2);
        assert_eq!(app.records.len(), 29 * 24);
        assert_eq!(app.view, View::Week(0));
    }

    #[test]
    fn unknown_preset_is_ignored() {
        let mut app = make_app();
        app.switch_preset("nope");
        assert_eq!(app.label, "office");
    }

    #[test]
    fn invalid_config_surfaces_error() {
        let mut app = make_app();
        app.config.schedule.start = "25:00".to_string();
        app.regenerate();
        assert!(app.error.is_some());
        assert!(app.records.is_empty());
        assert!(app.visible().is_empty());
    }
}
