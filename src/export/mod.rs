//! Snapshot export.
//!
//! Renders a timer's themed view off-screen and writes it to a plain-text
//! file named after the timer. Export failures are reported to the caller
//! and logged there; they never take the application down.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

use crate::files::export_filename;
use crate::render::{render_theme, RenderContext};
use crate::timer::TimerRecord;

/// Fixed snapshot surface size, matching a standard terminal.
const SNAPSHOT_WIDTH: u16 = 80;
const SNAPSHOT_HEIGHT: u16 = 24;

/// Render `record`'s countdown at `now_ms` and write it to `out_dir`.
///
/// Returns the path of the written file.
pub fn export_snapshot(record: &TimerRecord, out_dir: &Path, now_ms: i64) -> Result<PathBuf> {
    let content = render_snapshot(record, now_ms)?;
    let path = out_dir.join(export_filename(&record.name));

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating export directory {}", out_dir.display()))?;
    fs::write(&path, content)
        .with_context(|| format!("writing snapshot {}", path.display()))?;
    Ok(path)
}

/// Render the snapshot content without touching the filesystem.
pub fn render_snapshot(record: &TimerRecord, now_ms: i64) -> Result<String> {
    let backend = TestBackend::new(SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT);
    let mut terminal = Terminal::new(backend).context("creating off-screen terminal")?;
    let ctx = RenderContext::for_record(record, now_ms);

    terminal
        .draw(|frame| {
            let area = frame.area();
            let header = Rect::new(area.x, area.y, area.width, 2);
            let body = Rect::new(
                area.x,
                area.y + 2,
                area.width,
                area.height.saturating_sub(3),
            );
            let footer = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);

            let title = ratatui::widgets::Paragraph::new(record.name.clone())
                .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(title, header);

            render_theme(frame, body, record.theme, &ctx);

            let target = ratatui::widgets::Paragraph::new(record.target_date.clone())
                .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(target, footer);
        })
        .context("rendering snapshot")?;

    Ok(buffer_to_text(terminal.backend().buffer()))
}

/// Flatten a rendered buffer into plain text, one line per row.
fn buffer_to_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::with_capacity((area.width as usize + 1) * area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::with_capacity(area.width as usize);
        for x in area.left()..area.right() {
            match buffer.cell((x, y)) {
                Some(cell) => line.push_str(cell.symbol()),
                None => line.push(' '),
            }
        }
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text
}
