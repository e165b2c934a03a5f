//! `NAME=USERS` stage arguments given on the command line.

use crate::engine::Stage;
use crate::utils::error::InputError;

/// Parse a `NAME=USERS` pair into a [`Stage`]
///
/// The split happens on the last `=`, so names may contain `=` themselves.
/// Thousands separators (`_` or `,`) in the count are accepted.
///
/// # Example
/// ```
/// use funnel_calc_studio::input::parse_stage_arg;
///
/// let stage = parse_stage_arg("Add to Cart=8,000").unwrap();
/// assert_eq!(stage.name, "Add to Cart");
/// assert_eq!(stage.users, 8000);
/// ```
pub fn parse_stage_arg(arg: &str) -> Result<Stage, InputError> {
    let invalid = || InputError::InvalidStageArg(arg.to_string());

    let (name, users) = arg.rsplit_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }

    let digits: String = users
        .trim()
        .chars()
        .filter(|c| *c != '_' && *c != ',')
        .collect();
    let users = digits.parse::<u64>().map_err(|_| invalid())?;

    Ok(Stage::new(name, users))
}
