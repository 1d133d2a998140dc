use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use typerace::{
    display::{format_elapsed, format_wpm},
    feedback::WordStatus,
    session::State,
};
use unicode_width::UnicodeWidthStr;

use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = self.engine.display();
        let state = self.engine.state();

        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);
        let dim_bold_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        // size from the words on screen; mid-run that is the snapshot, not the latest sample
        let reference_width = display
            .feedback
            .iter()
            .map(|f| f.word.width())
            .sum::<usize>()
            + display.feedback.len().saturating_sub(1);
        let reference_lines = if reference_width <= max_chars_per_line as usize {
            1
        } else {
            ((reference_width as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1),               // difficulty
                Constraint::Min(0),                  // padding
                Constraint::Length(reference_lines), // reference text
                Constraint::Length(1),               // padding
                Constraint::Length(3),               // input field
                Constraint::Length(1),               // stats
                Constraint::Min(0),                  // padding
                Constraint::Length(1),               // legend
            ])
            .split(area);

        Paragraph::new(Span::styled(
            format!("Level: {}", display.label),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

        let mut spans = Vec::with_capacity(display.feedback.len() * 2);
        for (idx, word) in display.feedback.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw(" "));
            }
            let style = match word.status {
                WordStatus::Correct => green_bold_style,
                WordStatus::Incorrect => red_bold_style,
                WordStatus::Untyped => dim_bold_style,
            };
            spans.push(Span::styled(word.word.clone(), style));
        }

        Paragraph::new(Line::from(spans))
            .alignment(if reference_lines == 1 {
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: true })
            .render(chunks[2], buf);

        let input_title = match state {
            State::Running => "type here",
            State::Idle => "press enter to start",
            State::Stopped => "stopped",
        };
        let input_style = if display.input_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Paragraph::new(format!("{}▏", display.input))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(input_style)
                    .title(input_title),
            )
            .render(chunks[4], buf);

        // the engine only reports elapsed time on stop; show a live clock meanwhile
        let elapsed = match (state, self.engine.session().started_at) {
            (State::Running, Some(started_at)) => started_at.elapsed().as_secs_f64(),
            _ => display.elapsed,
        };
        Paragraph::new(Span::styled(
            format!(
                "{}s   {} wpm   {}% acc",
                format_elapsed(elapsed),
                format_wpm(display.wpm),
                display.accuracy.round()
            ),
            bold_style,
        ))
        .alignment(Alignment::Center)
        .render(chunks[5], buf);

        let mut legend = Vec::new();
        if display.start_enabled {
            legend.push("(enter) start");
        }
        if display.stop_enabled {
            legend.push("(enter) stop");
        }
        if display.retry_enabled {
            legend.push("(ctrl+r) retry");
        }
        legend.push("(tab) next level");
        legend.push("(esc)ape");

        Paragraph::new(Span::styled(legend.join(" / "), italic_style)).render(chunks[7], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typerace::samples::Difficulty;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_reference_and_legend() {
        let app = App::new(Difficulty::Easy, Some("The cat sat.".to_string())).unwrap();
        let area = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(area);

        (&app).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Level: Custom"));
        assert!(text.contains("The cat sat."));
        assert!(text.contains("(enter) start"));
        assert!(text.contains("0.00s"));
    }

    #[test]
    fn keeps_the_running_sentence_after_switching_level() {
        let long = "a fairly long sentence that certainly needs more than one line to fit here";
        let mut app = App::new(Difficulty::Easy, Some("short one".to_string())).unwrap();
        app.engine.on_start_requested();
        app.engine.on_reference_text_available(long, "Hard");

        let area = Rect::new(0, 0, 40, 16);
        let mut buf = Buffer::empty(area);
        (&app).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Level: Custom"));
        assert!(text.contains("short one"));
        assert!(!text.contains("fairly"));
    }

    #[test]
    fn renders_in_a_tiny_area_without_panicking() {
        let app = App::new(Difficulty::Hard, None).unwrap();
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);

        (&app).render(area, &mut buf);
    }
}
