#[macro_use]
extern crate afl;

fn main() {
    fuzz!(|data: &[u8]| {
        na_snbt_fuzz::test(data);
    });
}
