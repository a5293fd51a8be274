use super::*;

#[test]
fn outside_browser_reads_miss_after_writes() {
    save_json("blogpessoal_test", &vec![1, 2, 3]);
    assert_eq!(load_json::<Vec<i32>>("blogpessoal_test"), None);
    remove("blogpessoal_test");
    assert_eq!(load_json::<Vec<i32>>("blogpessoal_test"), None);
}
