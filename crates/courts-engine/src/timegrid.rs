//! Second offsets since midnight → human-readable clock labels.
//!
//! The hour component is not clamped: step arithmetic past closing time can run
//! beyond 24h, and `to_label(90_000)` yields `"25:00"`.

/// Seconds since local midnight.
pub type TimeOffset = u32;

/// Format an offset as zero-padded `"HH:MM"`.
pub fn to_label(offset: TimeOffset) -> String {
    let (h, m, _) = split(offset);
    format!("{:02}:{:02}", h, m)
}

/// Format an offset as zero-padded `"HH:MM:SS"`.
pub fn to_label_with_seconds(offset: TimeOffset) -> String {
    let (h, m, s) = split(offset);
    format!("{:02}:{:02}:{:02}", h, m, s)
}

fn split(offset: TimeOffset) -> (u32, u32, u32) {
    (offset / 3600, (offset % 3600) / 60, offset % 60)
}
