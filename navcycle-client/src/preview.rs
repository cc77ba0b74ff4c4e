use std::io::Write;

use navcycle_shared::{NavigationNotification, NotificationIdentity, compute_entry};

use crate::AppError;

/// Write `count` entries starting at counter `start`, as a table or as a JSON
/// array of payloads. Entries are streamed one at a time.
pub fn write_preview<W: Write>(
    out: &mut W,
    start: u64,
    count: u64,
    json: bool,
) -> Result<(), AppError> {
    let counters = (0..count).map_while(|i| start.checked_add(i));
    if json {
        let identity = NotificationIdentity::navigation();
        out.write_all(b"[")?;
        let mut first = true;
        for counter in counters {
            out.write_all(if first { b"\n" } else { b",\n" })?;
            first = false;
            let payload = NavigationNotification::for_entry(&identity, &compute_entry(counter));
            serde_json::to_writer_pretty(&mut *out, &payload)?;
        }
        out.write_all(if first { b"]\n" } else { b"\n]\n" })?;
        return Ok(());
    }

    for counter in counters {
        let entry = compute_entry(counter);
        let alert = if entry.alert_once { "silent" } else { "alert" };
        writeln!(
            out,
            "{counter:>6}  {:<12} {:>7}  {:<6} {}",
            entry.title,
            entry.distance.to_string(),
            alert,
            entry.icon
        )?;
    }
    Ok(())
}
