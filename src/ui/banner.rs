//! Title art.

pub const BANNER: &str = r#"______ _            _____       _            _       _
|  _  (_)          /  __ \     | |          | |     | |
| | | |_  ___ ___  | /  \/ __ _| | ___ _   _| | __ _| |_ ___  _ __
| | | | |/ __/ _ \ | |    / __ | |/ __| | | | |/ __ | __/ _ \| '__|
| |/ /| | (_|  __/ | \__/\ (_| | | (__| |_| | | (_| | || (_) | |
|___/ |_|\___\___|  \____/\__,_|_|\___|\__,_|_|\__,_|\__\___/|_|"#;

pub fn banner_height() -> u16 {
    BANNER.lines().count() as u16
}
