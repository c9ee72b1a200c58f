pub mod banner;
pub mod throbber;

use crate::calculator::{CalculatorScreen, Phase};
use banner::{banner_height, BANNER};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FOOTER: &str = "<enter> next • <shift+tab> previous • <r> restart • <q> quit";

fn focused_style() -> Style {
    Style::default().fg(Color::Indexed(205))
}

fn blurred_style() -> Style {
    Style::default().fg(Color::Indexed(248))
}

/// Draw the whole calculator: banner, questions, results, key help.
pub fn draw_calculator(frame: &mut Frame, screen: &CalculatorScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(banner_height() + 1), // Banner
            Constraint::Min(0),                      // Questions + results
            Constraint::Length(1),                   // Controls
        ])
        .split(frame.size());

    let banner = Paragraph::new(BANNER).style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(banner, chunks[0]);

    let lines = body_lines(screen);
    let offset = body_scroll(screen, lines.len(), chunks[1].height);
    let body = Paragraph::new(lines).scroll((offset, 0));
    frame.render_widget(body, chunks[1]);

    let controls = Paragraph::new(FOOTER).style(blurred_style());
    frame.render_widget(controls, chunks[2]);
}

/// Rows to scroll the body by so the interesting part fits in `height` rows.
///
/// While editing the questions sit at the top and the focused one is always
/// visible. Once results are in, the body scrolls towards them, but never
/// past the last question.
fn body_scroll(screen: &CalculatorScreen, line_count: usize, height: u16) -> u16 {
    if screen.is_editing() {
        return 0;
    }
    let overflow = line_count.saturating_sub(height as usize);
    let last_question = screen.form.questions.len().saturating_sub(1);
    overflow.min(last_question) as u16
}

fn body_lines(screen: &CalculatorScreen) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let editing = screen.is_editing();

    for (index, question) in screen.form.questions.iter().enumerate() {
        let focused = editing && index == screen.form.focus_index;
        let style = if focused {
            focused_style()
        } else {
            blurred_style()
        };
        let cursor = if focused { "_" } else { "" };

        lines.push(Line::from(vec![
            Span::raw(format!("{}: ", question.text)),
            Span::styled(format!("> {}{}", question.value, cursor), style),
        ]));
    }
    lines.push(Line::from(""));

    if let Some(error) = &screen.form.validation_error {
        lines.push(Line::from(Span::styled(
            format!("✗ {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    if let Some(status) = &screen.status {
        lines.push(Line::from(Span::styled(status.clone(), blurred_style())));
    }

    match &screen.phase {
        Phase::Editing => {}
        Phase::Running(config) => {
            lines.push(Line::from(Span::styled(
                format!(
                    "{} {} ({} rolls)",
                    throbber::spinner_char(),
                    throbber::rolling_message(screen.generation),
                    config.trial_count
                ),
                Style::default().fg(Color::Yellow),
            )));
        }
        Phase::Done(report) => {
            let bold = Style::default().add_modifier(Modifier::BOLD);
            for row in &report.outcomes {
                lines.push(Line::from(Span::styled(report.outcome_line(row), bold)));
            }
        }
    }

    lines
}
