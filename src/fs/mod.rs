pub mod index;
pub mod layout;

pub use index::{latest, list_entry_names, parse_entries, previous, scan_snapshots};
pub use layout::{profile_dir, snapshot_data_dir, snapshots_dir};
