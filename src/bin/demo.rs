use uncurl::uncurl;

fn main() {
    let curl_command = r#"curl 'http://example.com/search?q=rust&page=2' -H 'Accept: application/json' --data-raw '{"lang":"en"}'"#;
    let result = uncurl(curl_command);
    println!("{:#?}", result);
}
