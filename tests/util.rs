#[path = "util/file_list.rs"]
mod file_list;
#[path = "util/cores.rs"]
mod cores;
