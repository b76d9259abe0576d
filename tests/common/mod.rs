#![allow(dead_code)]

use gamefold::{aggregate_lines, Report};
use std::collections::{HashMap, HashSet};

pub const INIT_GAME: &str = r"  0:00 InitGame: \sv_floodProtect\1\sv_maxPing\0\sv_minPing\0\";
pub const SHUTDOWN: &str = "  1:47 ShutdownGame:";
pub const SEPARATOR: &str = " 20:37 ------------------------------------------------------------";

pub fn user_info(id: u32, name: &str) -> String {
    format!(r" 20:34 ClientUserinfoChanged: {id} n\{name}\t\0\model\xian/default\hmodel\xian/default")
}

pub fn kill(killer: u32, killed: u32, cause: &str) -> String {
    format!(" 22:06 Kill: {killer} {killed} 7: Someone killed Someone by {cause}")
}

pub fn run(lines: &[String]) -> Vec<Report> {
    aggregate_lines(lines)
}

pub fn players(names: &[&str]) -> HashSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

pub fn scores<V: Copy>(entries: &[(&str, V)]) -> HashMap<String, V> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}
