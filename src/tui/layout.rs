//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};

use crate::report::consumption_table;

use super::runtime::App;
use super::style;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // KPI row
            Constraint::Min(10),   // chart
            Constraint::Length(7), // sizing + parameters
            Constraint::Length(10), // history table
            Constraint::Length(2), // footer + status
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_kpis(frame, app, chunks[1]);
    render_chart(frame, app, chunks[2]);
    render_panels(frame, app, chunks[3]);
    render_history(frame, app, chunks[4]);
    render_footer(frame, app, chunks[5]);
}

/// Header bar: program badge, data source, record count.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let source_style = if app.loaded.source.is_sample() {
        Style::default().fg(style::SAMPLE_SOURCE)
    } else {
        Style::default()
    };

    let header = Line::from(vec![
        Span::styled(
            " SOLAR-REPORT ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(app.loaded.source.to_string(), source_style),
        Span::raw(format!(" │ {} months ", app.loaded.series.len())),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// KPI row: mean, maximum, minimum and trend.
fn render_kpis(frame: &mut Frame, app: &App, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    let stats = app.report.stats;
    let plain = Style::default();
    kpi_cell(
        frame,
        cells[0],
        " Mean ",
        fmt_kwh(stats.map(|s| s.mean_kwh)),
        plain,
    );
    kpi_cell(
        frame,
        cells[1],
        " Max ",
        fmt_kwh(stats.map(|s| s.max_kwh)),
        plain,
    );
    kpi_cell(
        frame,
        cells[2],
        " Min ",
        fmt_kwh(stats.map(|s| s.min_kwh)),
        plain,
    );

    let (trend_text, trend_style) = match app.report.trend_pct {
        Some(t) => (
            format!("{t:+.1}%"),
            Style::default().fg(style::trend_color(t)),
        ),
        None => ("n/a".to_string(), Style::default().fg(style::FOOTER_FG)),
    };
    kpi_cell(frame, cells[3], " Trend ", trend_text, trend_style);
}

fn kpi_cell(frame: &mut Frame, area: Rect, title: &str, value: String, value_style: Style) {
    let para = Paragraph::new(Line::from(Span::styled(
        value,
        value_style.add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(para, area);
}

/// Consumption bars with the moving-average line on top.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let records = app.loaded.series.records();

    let bars: Vec<(f64, f64)> = records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.kwh.map(|kwh| (i as f64, kwh)))
        .collect();

    let line: Vec<(f64, f64)> = app
        .report
        .moving_average
        .iter()
        .enumerate()
        .filter_map(|(i, ma)| ma.map(|v| (i as f64, v)))
        .collect();

    let y_bounds = style::chart_bounds(&bars, &line);
    let x_lo = -0.5;
    let x_hi = (records.len() as f64 - 0.5).max(x_lo + 1.0);

    let window = app.report.params.ma_window;
    let ma_name = format!("avg({window})");
    let datasets = vec![
        Dataset::default()
            .name("kWh")
            .marker(symbols::Marker::HalfBlock)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(style::BAR_COLOR))
            .data(&bars),
        Dataset::default()
            .name(ma_name)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(style::MA_COLOR))
            .data(&line),
    ];

    let (x_label_lo, x_label_hi) = match app.loaded.series.span() {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (String::new(), String::new()),
    };
    let y_label_lo = format!("{:.0}", y_bounds[0]);
    let y_label_hi = format!("{:.0}", y_bounds[1]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Monthly Consumption ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("month")
                .bounds([x_lo, x_hi])
                .labels(vec![x_label_lo, x_label_hi]),
        )
        .y_axis(
            Axis::default()
                .title("kWh")
                .bounds(y_bounds)
                .labels(vec![y_label_lo, y_label_hi]),
        );

    frame.render_widget(chart, area);
}

/// Sizing outcome next to the parameters that produced it.
fn render_panels(frame: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    let sizing_lines = match &app.report.sizing {
        Some(s) => vec![
            Line::from(format!("  panel yield:  {:.1} kWh/month", s.panel_kwh_month)),
            Line::from(format!(
                "  panels:       {} x {} Wp",
                s.panel_count, app.report.params.panel_wp
            )),
            Line::from(format!("  system:       {:.2} kWp", s.system_kwp)),
            Line::from(format!("  savings:      {:.0} / month", s.monthly_savings)),
        ],
        None => vec![Line::from("  no usable readings")],
    };
    let sizing = Paragraph::new(sizing_lines)
        .block(Block::default().title(" PV Sizing ").borders(Borders::ALL));
    frame.render_widget(sizing, halves[0]);

    let p = &app.report.params;
    let params_lines = vec![
        Line::from(format!("  cost:         {:.2} /kWh", p.cost_per_kwh)),
        Line::from(format!("  coverage:     {:.0}%", p.coverage_pct)),
        Line::from(format!("  sun hours:    {:.1} h/day", p.peak_sun_hours)),
        Line::from(format!("  panel:        {} Wp", p.panel_wp)),
        Line::from(format!("  window:       {} months", p.ma_window)),
    ];
    let params = Paragraph::new(params_lines).block(
        Block::default()
            .title(" Parameters ")
            .borders(Borders::ALL),
    );
    frame.render_widget(params, halves[1]);
}

/// Month-by-month table with the smoothed column.
fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let table = consumption_table(&app.loaded.series, &app.report.moving_average);
    let para = Paragraph::new(table)
        .block(Block::default().title(" History ").borders(Borders::ALL));
    frame.render_widget(para, area);
}

/// Footer with keybinding hints and the last action's outcome.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            " q:Quit  c/C:Cost  v/V:Coverage  h/H:Sun  p/P:Panel  w/W:Window  e:Export  r:Reload  d:Reset",
            Style::default().fg(style::FOOTER_FG),
        )),
        Line::from(Span::raw(format!(
            " {}",
            app.status.as_deref().unwrap_or("")
        ))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn fmt_kwh(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1} kWh"),
        None => "n/a".to_string(),
    }
}
