use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Chart, Clear, Dataset, Gauge, GraphType, Paragraph, Tabs,
};

use crate::charts;
use crate::content;
use crate::scoring::evaluate;
use crate::tui::app::{App, InputMode, Page, SLIDERS};

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 10 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Tabs(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);
    match app.page {
        Page::Home => render_home(frame, chunks[2], app),
        Page::Dashboard => render_dashboard(frame, chunks[2], app),
        Page::Habits => render_list_page(frame, chunks[2], app, "Healthy Lifestyle Tips", {
            content::HEALTHY_HABITS.iter().map(|t| (None, *t)).collect()
        }),
        Page::Diet => render_list_page(
            frame,
            chunks[2],
            app,
            "Recommended Diet Plan",
            content::DIET_PLAN
                .iter()
                .map(|(k, v)| (Some(*k), *v))
                .collect(),
        ),
        Page::Prevention => render_list_page(frame, chunks[2], app, "Diabetes Prevention Tips", {
            content::PREVENTION_TIPS.iter().map(|t| (None, *t)).collect()
        }),
    }
    render_status_bar(frame, chunks[3], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let left = "Diabetes Risk Dashboard";
    let mut spans = vec![Span::styled(
        left,
        Style::default().fg(app.theme.title_color).bold(),
    )];

    // Right-align the time since the last assessment, if any
    if let Some(assessed) = app.last_assessed {
        let secs = assessed.elapsed().as_secs();
        let right = if secs < 60 {
            format!("assessed {}s ago", secs)
        } else {
            format!("assessed {}m ago", secs / 60)
        };
        let padding = (area.width as usize).saturating_sub(left.len() + right.len());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(right, Style::default().fg(app.theme.muted)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<&str> = Page::ALL.iter().map(|p| p.title()).collect();

    let tabs = Tabs::new(titles)
        .select(app.page.index())
        .style(app.theme.tab_inactive_style)
        .highlight_style(app.theme.tab_active_style)
        .divider(" | ");

    frame.render_widget(tabs, area);
}

fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Section header
        Constraint::Length(3), // Sliders
        Constraint::Length(1), // Hint
        Constraint::Length(1), // Spacer
        Constraint::Fill(1),   // Result cards
    ])
    .split(area);

    let header = Paragraph::new(Span::styled(
        "Patient Details",
        Style::default().bold(),
    ));
    frame.render_widget(header, chunks[0]);

    let slider_areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(chunks[1]);
    for (i, spec) in SLIDERS.iter().enumerate() {
        let value = app.values[i];
        let ratio = ((value - spec.min) / (spec.max - spec.min)).clamp(0.0, 1.0);
        let focused = app.focus == i;

        let border_style = if focused {
            Style::default().fg(app.theme.slider_focused_border)
        } else {
            Style::default().fg(app.theme.muted)
        };
        let block = Block::bordered()
            .title(spec.label)
            .border_style(border_style);

        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(app.theme.slider_filled))
            .ratio(ratio)
            .label(format!("{:.*}", spec.decimals, value));
        frame.render_widget(gauge, slider_areas[i]);
    }

    let hint = Paragraph::new("j/k: select field   h/l: adjust   Enter: assess risk")
        .style(Style::default().fg(app.theme.muted));
    frame.render_widget(hint, chunks[2]);

    render_result_cards(frame, chunks[4], app);
}

fn render_result_cards(frame: &mut Frame, area: Rect, app: &App) {
    let Some(vitals) = app.session.last_vitals() else {
        let msg = Paragraph::new("No assessment yet. Press Enter to assess risk.")
            .style(Style::default().fg(app.theme.muted));
        frame.render_widget(msg, area);
        return;
    };

    // Recompute rather than cache: the stored vitals are the only state.
    let assessment = evaluate(vitals);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    let risk_card = Paragraph::new(format!(" Risk Level: {} ", assessment.risk)).style(
        Style::default()
            .fg(Color::Black)
            .bg(app.theme.risk_color(assessment.risk))
            .bold(),
    );
    frame.render_widget(risk_card, chunks[0]);

    let confidence_card = Paragraph::new(format!(" Confidence: {}% ", assessment.confidence))
        .style(
            Style::default()
                .fg(Color::White)
                .bg(app.theme.card_info_bg)
                .bold(),
        );
    frame.render_widget(confidence_card, chunks[2]);
}

fn render_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let Some(vitals) = app.session.last_vitals() else {
        // Recoverable notice, never a crash: assessment-derived views are
        // gated on a recorded prediction.
        let warning = Paragraph::new("Please run an assessment from the Home page first.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.risk_moderate).bold());
        let centered = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);
        frame.render_widget(warning, centered[1]);
        return;
    };

    let halves = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(area);

    render_metrics_chart(frame, halves[0], app, vitals);
    render_contribution_chart(frame, halves[1], app, vitals);
}

fn render_metrics_chart(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    vitals: &crate::scoring::Vitals,
) {
    let data = charts::metrics_chart(vitals);
    let bars: Vec<Bar> = data
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .label(Line::from(*label))
                .value(value.round() as u64)
                .text_value(format!("{:.1}", value))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::bordered().title("Patient Health Metrics"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(3)
        .bar_style(Style::default().fg(app.theme.bar_color))
        .value_style(Style::default().fg(Color::Black).bg(app.theme.bar_color));

    frame.render_widget(chart, area);
}

fn render_contribution_chart(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    vitals: &crate::scoring::Vitals,
) {
    let data = charts::risk_contribution_chart(vitals);
    let points: Vec<(f64, f64)> = data
        .iter()
        .enumerate()
        .map(|(i, (_, points))| (i as f64, *points as f64))
        .collect();

    let dataset = Dataset::default()
        .name("Risk Score")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(app.theme.line_color))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(Block::bordered().title("Risk Contribution by Factor"))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.axis_color))
                .bounds([0.0, 3.0])
                .labels(["Age", "BMI", "BP", "Glucose"]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.axis_color))
                .bounds([0.0, 3.0])
                .labels(["0", "1", "2", "3"]),
        );

    frame.render_widget(chart, area);
}

fn render_list_page(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    title: &str,
    items: Vec<(Option<&str>, &str)>,
) {
    let mut lines = vec![
        Line::from(Span::styled(title.to_string(), Style::default().bold())),
        Line::from(""),
    ];
    for (key, text) in items {
        let mut spans = vec![Span::styled(
            "• ",
            Style::default().fg(app.theme.bullet_color),
        )];
        if let Some(key) = key {
            spans.push(Span::styled(
                format!("{}: ", key),
                Style::default().bold(),
            ));
        }
        spans.push(Span::raw(text.to_string()));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(app.theme.flash_success),
        ))
    } else {
        let hints: Vec<(&str, &str)> = match app.page {
            Page::Home => vec![
                ("Tab", ":page "),
                ("j/k", ":field "),
                ("h/l", ":adjust "),
                ("Enter", ":assess "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            _ => vec![
                ("Tab", ":page "),
                ("1-5", ":jump "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = vec![
            Span::styled(app.page.title(), Style::default().fg(app.theme.muted)),
            Span::raw("  "),
        ];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(app.theme.status_key_color),
            ));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(app.theme.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn render_help_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(46, 14, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(app.theme.popup_border));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(app.theme.status_key_color).bold();
    let help_lines = vec![
        Line::from(vec![
            Span::styled("Tab / Shift-Tab  ", key_style),
            Span::raw("Next / previous page"),
        ]),
        Line::from(vec![
            Span::styled("1-5              ", key_style),
            Span::raw("Jump to page"),
        ]),
        Line::from(vec![
            Span::styled("j / k, Down / Up ", key_style),
            Span::raw("Select vital (Home)"),
        ]),
        Line::from(vec![
            Span::styled("h / l, Left/Right", key_style),
            Span::raw("Adjust vital (Home)"),
        ]),
        Line::from(vec![
            Span::styled("Enter            ", key_style),
            Span::raw("Assess risk (Home)"),
        ]),
        Line::from(vec![
            Span::styled("?                ", key_style),
            Span::raw("Show/hide this help"),
        ]),
        Line::from(vec![
            Span::styled("q / Ctrl-c       ", key_style),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(app.theme.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(help_lines), inner);
}
