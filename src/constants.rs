pub const CSV_FIELD_SEPARATOR: char = ',';
pub const CSV_QUOTE_CHAR: char = '"';

pub const FIELD_COUNT: usize = 6;

pub const DEFAULT_DATA_FILE: &str = "students.csv";
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const DEFAULT_VERBOSITY: &str = "normal";
pub const DEFAULT_LOG_FILE: &str = "rollcall.log";

pub const AFFIRMATIVE_ANSWER: &str = "y";
