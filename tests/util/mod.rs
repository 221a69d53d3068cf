mod test_utils;

pub use test_utils::{bearer, issue_token, response_json, test_state};
