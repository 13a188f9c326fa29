// SPDX-License-Identifier: MIT OR Apache-2.0

// Preferred families on Apple platforms, most preferred first
pub const fn families() -> &'static [&'static str] {
    &[
        "PingFang SC",
        "Apple SD Gothic Neo",
        "Helvetica",
        "Myanmar Sangam MN",
        "Thonburi",
        "Mishafi",
        "Menlo",
        "Kailasa",
        "Kefa",
        "Kohinoor Telugu",
        "Hiragino Maru Gothic ProN",
    ]
}
