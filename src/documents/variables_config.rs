//! Document 01: Twig template variables and `config.json` keys.

use crate::style::{NAVY, PISTACHIO, WidthBounds};
use crate::table::{Document, Row, Sheet, Table};

static VARIABLES: [Row; 5] = [
    Row::Data(&[
        "current_locale",
        "string",
        "اللغة الحالية - تتحكم بـ lang و dir",
        "'en'",
    ]),
    Row::Data(&["asset_path", "string", "مسار مجلد الأصول (CSS/JS)", "'' (فارغ)"]),
    Row::Data(&[
        "page_path",
        "string",
        "مسار الصفحات (للروابط بين الصفحات)",
        "'' (فارغ)",
    ]),
    Row::Data(&[
        "active_page",
        "string",
        "اسم الصفحة النشطة لتمييزها في القائمة",
        "'' (فارغ)",
    ]),
    Row::Data(&["config", "object", "كائن إعدادات الثيم من config.json", "--"]),
];

static CONFIG_KEYS: [Row; 13] = [
    Row::Data(&["config.site.name", "string", "اسم الموقع", "Farabi Academy"]),
    Row::Data(&["config.site.logo_text", "string", "النص داخل اللوغو الدائري", "FA"]),
    Row::Data(&[
        "config.site.email",
        "string",
        "بريد التواصل",
        "info@farabiacademy.com",
    ]),
    Row::Data(&["config.site.phone", "string", "رقم الهاتف", "+1 (555) 123-4567"]),
    Row::Data(&[
        "config.site.address",
        "string",
        "العنوان",
        "123 Education Street, Learning City",
    ]),
    Row::Data(&[
        "config.colors.pistachio",
        "string",
        "اللون الأساسي (أخضر فستقي)",
        "#93c572",
    ]),
    Row::Data(&[
        "config.colors.pistachio_dark",
        "string",
        "اللون الأساسي الداكن",
        "#7db157",
    ]),
    Row::Data(&["config.colors.navy", "string", "اللون الثانوي (كحلي)", "#1e3a5f"]),
    Row::Data(&["config.colors.navy_dark", "string", "اللون الثانوي الداكن", "#152a45"]),
    Row::Data(&["config.social.facebook", "string", "رابط فيسبوك", "#"]),
    Row::Data(&["config.social.instagram", "string", "رابط انستغرام", "#"]),
    Row::Data(&["config.social.twitter", "string", "رابط تويتر", "#"]),
    Row::Data(&["config.social.tiktok", "string", "رابط تيك توك", "#"]),
];

static SHEETS: [Sheet; 2] = [
    Sheet {
        name: "Twig Variables",
        tab_color: PISTACHIO,
        title: "Twig Template Variables",
        tables: &[Table {
            caption: None,
            headers: &["Variable", "Type", "Description", "Default Value"],
            rows: &VARIABLES,
        }],
        widths: WidthBounds::DEFAULT,
        translated_column: None,
        width_overrides: &[],
    },
    Sheet {
        name: "Config Keys",
        tab_color: NAVY,
        title: "Config Object Keys (config.json)",
        tables: &[Table {
            caption: None,
            headers: &["Key", "Type", "Description (الوصف)", "Example (مثال)"],
            rows: &CONFIG_KEYS,
        }],
        widths: WidthBounds::DEFAULT,
        translated_column: None,
        width_overrides: &[],
    },
];

pub(super) fn document() -> Document {
    Document {
        file_stem: "01-variables-config",
        sheets: &SHEETS,
    }
}
