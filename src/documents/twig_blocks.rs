//! Document 02: the overridable Twig blocks of the base layout.

use crate::style::{PISTACHIO, WidthBounds};
use crate::table::{Document, Row, Sheet, Table};

static BLOCKS: [Row; 11] = [
    Row::Data(&["{% block title %}", "<title>", "عنوان الصفحة في التبويب", "كل الصفحات"]),
    Row::Data(&["{% block meta_description %}", "<meta>", "وصف الصفحة لـ SEO", "كل الصفحات"]),
    Row::Data(&[
        "{% block head_extra %}",
        "<head>",
        "إضافة CSS أو meta إضافية",
        "حسب الحاجة",
    ]),
    Row::Data(&["{% block body_class %}", "<body>", "كلاسات CSS للـ body", "كل الصفحات"]),
    Row::Data(&[
        "{% block header %}",
        "قبل <main>",
        "النافبار / الهيدر",
        "index, courses, course-details (افتراضي) | cart (مُعدّل)",
    ]),
    Row::Data(&[
        "{% block main_attrs %}",
        "<main>",
        "خصائص إضافية لتاغ main",
        "حسب الحاجة",
    ]),
    Row::Data(&[
        "{% block content %}",
        "<main>",
        "المحتوى الرئيسي للصفحة (مطلوب)",
        "كل الصفحات",
    ]),
    Row::Data(&["{% block footer %}", "بعد <main>", "الفوتر", "cart يُعدّله لفوتر مبسط"]),
    Row::Data(&[
        "{% block floating_buttons %}",
        "آخر الـ body",
        "أزرار عائمة (CTA + scroll top)",
        "index فقط",
    ]),
    Row::Data(&[
        "{% block scripts %}",
        "قبل </body>",
        "سكربتات JS خاصة بالصفحة",
        "كل الصفحات",
    ]),
    Row::Data(&["{% block scripts_extra %}", "آخر الـ body", "سكربتات إضافية", "حسب الحاجة"]),
];

static SHEETS: [Sheet; 1] = [Sheet {
    name: "Twig Blocks",
    tab_color: PISTACHIO,
    title: "Twig Blocks (بلوكات قابلة للتعديل)",
    tables: &[Table {
        caption: None,
        headers: &[
            "Block Name",
            "Location (الموقع)",
            "Description (الوصف)",
            "Used In (مُستخدم في)",
        ],
        rows: &BLOCKS,
    }],
    widths: WidthBounds::DEFAULT,
    translated_column: None,
    width_overrides: &[],
}];

pub(super) fn document() -> Document {
    Document {
        file_stem: "02-twig-blocks",
        sheets: &SHEETS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eleven_blocks_are_documented() {
        let doc = document();
        assert_eq!(doc.sheets.len(), 1);
        assert_eq!(doc.sheets[0].tables[0].rows.len(), 11);
    }

    #[test]
    fn block_names_keep_their_twig_delimiters() {
        for row in &BLOCKS {
            if let Row::Data(cells) = row {
                assert!(cells[0].starts_with("{% block "));
                assert!(cells[0].ends_with(" %}"));
            }
        }
    }
}
