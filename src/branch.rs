use regex::Regex;

use crate::error::BackportError;

/// Check a branch name against the release-branching policy.
///
/// Accepted: the trunk branch `master`, or `<major>.<minor>` where the minor
/// is all digits or the literal `x` (`7.x`, `7.10`, `123.0`). The match is
/// anchored, so anything else, including the empty string, is rejected.
pub fn validate_branch(branch: &str) -> Result<(), BackportError> {
    let re = Regex::new(r"^(\d+\.(\d+|x)|master)$").unwrap();
    if re.is_match(branch) {
        Ok(())
    } else {
        Err(BackportError::InvalidBranch(branch.to_string()))
    }
}
