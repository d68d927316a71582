pub mod formatter;
pub mod snapshot;

pub use formatter::{
    format_individual_table, format_team_table, format_time, format_tsv, should_use_colors,
};
pub use snapshot::{snapshot, IndividualRow, MeetSnapshot, TeamRow};
