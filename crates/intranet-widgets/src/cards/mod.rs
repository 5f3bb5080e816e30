//! Dashboard cards: announcements, celebrations and quick access shortcuts.

mod announcement;
mod birthday;
mod quick_access;

pub use announcement::{AnnouncementCard, CardVariant};
pub use birthday::{BirthdayCard, CelebrationVariant};
pub use quick_access::{CardLayout, QuickAccessCard};

#[cfg(test)]
pub(crate) fn buffer_contents(buf: &ratatui::buffer::Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
