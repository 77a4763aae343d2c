//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};

use super::runtime::App;
use super::style;
use crate::profile::chart_points;

const AXIS_TIME_FORMAT: &str = "%a %m-%d %H:%M";

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // chart
            Constraint::Length(5), // summary panel
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_chart(frame, app, chunks[1]);
    render_summary(frame, app, chunks[2]);
    render_footer(frame, chunks[3]);
}

/// Header bar: preset name, month, visible range.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " LOAD-MODEL ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(&app.label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            " │ {}-{:02} │ {} │ {}-{} ",
            app.config.calendar.year,
            app.config.calendar.month,
            app.view_label(),
            app.config.schedule.start,
            app.config.schedule.end,
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Hourly load line with operating hours marked.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Hourly Load ")
        .borders(Borders::ALL);

    if let Some(err) = &app.error {
        let msg = Paragraph::new(Line::from(Span::styled(
            format!("  {err}"),
            Style::default().fg(style::ERROR_FG),
        )))
        .block(block);
        frame.render_widget(msg, area);
        return;
    }

    let visible = app.visible();
    let load_data: Vec<(f64, f64)> = chart_points(visible)
        .into_iter()
        .enumerate()
        .map(|(i, (_, kw))| (i as f64, kw))
        .collect();
    let operating_data: Vec<(f64, f64)> = visible
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_operating)
        .map(|(i, r)| (i as f64, r.load_kw))
        .collect();

    let y_bounds = style::auto_bounds_y(&load_data);
    let x_hi = (load_data.len().saturating_sub(1) as f64).max(1.0);

    let datasets = vec![
        Dataset::default()
            .name("Load")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(style::LOAD_COLOR))
            .data(&load_data),
        Dataset::default()
            .name("Operating")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(style::OPERATING_COLOR))
            .data(&operating_data),
    ];

    let x_label_lo = visible
        .first()
        .map_or_else(String::new, |r| r.timestamp.format(AXIS_TIME_FORMAT).to_string());
    let x_label_hi = visible
        .last()
        .map_or_else(String::new, |r| r.timestamp.format(AXIS_TIME_FORMAT).to_string());
    let y_label_lo = format!("{:.1}", y_bounds[0]);
    let y_label_hi = format!("{:.1}", y_bounds[1]);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("time")
                .bounds([0.0, x_hi])
                .labels(vec![x_label_lo, x_label_hi]),
        )
        .y_axis(
            Axis::default()
                .title("kW")
                .bounds(y_bounds)
                .labels(vec![y_label_lo, y_label_hi]),
        );

    frame.render_widget(chart, area);
}

/// Month-wide statistics.
fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let s = &app.summary;
    let lines = vec![
        Line::from(format!(
            "  hours={}  operating={}  energy={:.1} kWh",
            s.hours, s.operating_hours, s.energy_kwh,
        )),
        Line::from(format!(
            "  mean={:.2} kW  peak={:.2} kW",
            s.mean_kw, s.peak_kw,
        )),
        Line::from(format!(
            "  base={:.1} kW  peak target={:.1} kW  noise={:.1}%",
            app.config.load.base_kw, app.config.load.peak_kw, app.config.noise.random_pct,
        )),
    ];

    let block = Block::default().title(" Summary ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  ←/→:Week  m:Month  1/2/3:Preset  r:Regenerate",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
