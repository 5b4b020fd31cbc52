// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_prose(size: usize) -> String {
    let base = "the quick brown fox.  jumps over\nthe lazy dog, again; and again!\n\n• first point • second point\na) one b) two c) three\nпривет мир? ok\n\n";
    base.repeat(size)
}
