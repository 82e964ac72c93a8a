//! Registers a system font with Hangul glyphs; egui's bundled fonts have none.

use egui::{FontData, FontDefinitions, FontFamily};

const HANGUL_FONT_NAME: &str = "hangul";

#[cfg(target_os = "windows")]
const HANGUL_FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\malgun.ttf",
    "C:\\Windows\\Fonts\\gulim.ttc",
];

#[cfg(target_os = "macos")]
const HANGUL_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/AppleGothic.ttf",
];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const HANGUL_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
];

pub fn install_hangul_font(ctx: &egui::Context) {
    let Some((path, bytes)) = HANGUL_FONT_CANDIDATES
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|bytes| (*path, bytes)))
    else {
        log::warn!("No Hangul font found; Korean labels may not render");
        return;
    };

    log::info!("Using Hangul font from {path}");
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(HANGUL_FONT_NAME.to_owned(), FontData::from_owned(bytes));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(HANGUL_FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);
}
