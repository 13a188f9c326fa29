// SPDX-License-Identifier: MIT OR Apache-2.0

// Preferred families on Windows, most preferred first
pub const fn families() -> &'static [&'static str] {
    &[
        /* CJK */
        "Microsoft YaHei",
        "Microsoft JhengHei",
        "Hiragino Sans GB",
        "SimSun",
        "FangSong",
        "KaiTi",
        "NSimSun",
        "SimHei",
        "DengXian",
        /* Adobe CJK */
        "Adobe Song Std",
        "Adobe Fangsong Std",
        "Adobe Heiti Std",
        "Adobe Kaiti Std",
        /* Latin */
        "Times New Roman",
        "Comic Sans MS",
        "Courier New",
        "Calibri",
        "Impact",
        "Microsoft Sans Serif",
        "Symbol",
        "Tahoma",
        "Trebuchet MS",
        "Verdana",
    ]
}
