pub mod formatter;

pub use formatter::{
    format_draft_board, format_my_team, format_score, format_tier_table, format_tier_tsv,
    should_use_colors,
};
