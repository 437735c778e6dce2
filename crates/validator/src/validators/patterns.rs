//! Compiled patterns used by the string rules.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern sources, for callers that want to compose their own rules.
pub mod source {
    pub const EMAIL: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";
    pub const INT: &str = r"^(?:[-+]?(?:0|[1-9][0-9]*))$";
    pub const FLOAT: &str = r"^(?:[-+]?(?:[0-9]+))?(?:\.[0-9]*)?(?:[eE][\+\-]?(?:[0-9]+))?$";
    pub const ASCII: &str = r"^[\x00-\x7F]+$";
    pub const BASE64: &str =
        r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{4})$";
    pub const ALPHA: &str = r"^[a-zA-Z]+$";
    pub const ALPHA_NUM: &str = r"^[a-zA-Z0-9]+$";
    pub const NUMBER: &str = r"^[0-9]+$";
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern compiles")
}

pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| compile(source::EMAIL));
pub static FLOAT: LazyLock<Regex> = LazyLock::new(|| compile(source::FLOAT));
pub static ASCII: LazyLock<Regex> = LazyLock::new(|| compile(source::ASCII));
pub static BASE64: LazyLock<Regex> = LazyLock::new(|| compile(source::BASE64));
pub static ALPHA: LazyLock<Regex> = LazyLock::new(|| compile(source::ALPHA));
pub static ALPHA_NUM: LazyLock<Regex> = LazyLock::new(|| compile(source::ALPHA_NUM));
