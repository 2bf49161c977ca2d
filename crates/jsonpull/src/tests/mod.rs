mod parse_bad;
mod utils;
