// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
 _                                 _                         _
| |  ___ ___    __ _ _   _| |_ ___   __ _ _ __ __ _  __| | ___ _ __
| | / __/ __|  / _` | | | | __/ _ \ / _` | '__/ _` |/ _` |/ _ \ '__|
| || (_| (__  | (_| | |_| | || (_) | (_| | | | (_| | (_| |  __/ |
|_| \___\___|  \__,_|\__,_|\__\___/ \__, |_|  \__,_|\__,_|\___|_|
                                    |___/

    LCC Assembly Autograder Execution Service
"#;
    println!("{}", banner);
}
