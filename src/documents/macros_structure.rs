//! Document 04: reusable Twig macros, plus the theme's file layout as a
//! second table on the same sheet.

use crate::style::{PISTACHIO, WidthBounds};
use crate::table::{Document, Row, Sheet, Table};

static MACROS: [Row; 2] = [
    Row::Data(&[
        "course_card",
        "pages/index.html.twig",
        "id, image, price, title_key, desc_key, title_default, desc_default",
        "كارت كورس في السلايدر بالصفحة الرئيسية",
    ]),
    Row::Data(&[
        "review_card",
        "pages/index.html.twig",
        "text, image, name, role",
        "كارت تقييم طالب في سلايدر المراجعات",
    ]),
];

static FILES: [Row; 20] = [
    Row::Data(&["config.json", "إعدادات الثيم (ألوان، معلومات الموقع، روابط السوشيال)"]),
    Row::Data(&["lang/en.json", "ملف الترجمة الإنجليزية (60+ مفتاح)"]),
    Row::Data(&["lang/ar.json", "ملف الترجمة العربية (60+ مفتاح)"]),
    Row::Data(&["layouts/base.html.twig", "القالب الرئيسي (head, meta, scripts, blocks)"]),
    Row::Data(&[
        "partials/header.html.twig",
        "النافبار (desktop + mobile + language toggle)",
    ]),
    Row::Data(&["partials/footer.html.twig", "الفوتر (روابط، سوشيال، معلومات تواصل)"]),
    Row::Data(&[
        "partials/floating-buttons.html.twig",
        "الأزرار العائمة (CTA + scroll to top)",
    ]),
    Row::Data(&[
        "pages/index.html.twig",
        "الصفحة الرئيسية (hero, courses, stats, reviews, FAQ)",
    ]),
    Row::Data(&["pages/courses.html.twig", "صفحة كل الكورسات (فلاتر، بحث، ترتيب)"]),
    Row::Data(&[
        "pages/course-details.html.twig",
        "صفحة تفاصيل الكورس (فيديو، محتوى، مدرب، مراجعات)",
    ]),
    Row::Data(&["pages/cart.html.twig", "صفحة سلة التسوق (عناصر، كوبون، دفع)"]),
    Row::Data(&["assets/css/fonts.css", "Google Fonts (Quicksand + Nunito)"]),
    Row::Data(&["assets/css/theme.css", "متغيرات CSS، ألوان، أنماط أساسية"]),
    Row::Data(&["assets/css/main.css", "أنيميشن، سلايدر، أكورديون، RTL"]),
    Row::Data(&["assets/js/utils.js", "دوال مساعدة (scroll, toast, debounce)"]),
    Row::Data(&["assets/js/app.js", "التطبيق الرئيسي (i18n, language toggle, nav)"]),
    Row::Data(&["assets/js/slider.js", "مكون السلايدر (Vanilla JS)"]),
    Row::Data(&["assets/js/counter.js", "أنيميشن العدادات في الإحصائيات"]),
    Row::Data(&["assets/js/accordion.js", "مكون الأكورديون"]),
    Row::Data(&["assets/js/form.js", "معالج فورم التواصل"]),
];

static SHEETS: [Sheet; 1] = [Sheet {
    name: "Macros & Components",
    tab_color: PISTACHIO,
    title: "Twig Macros & Reusable Components",
    tables: &[
        Table {
            caption: None,
            headers: &[
                "Macro Name",
                "File (الملف)",
                "Parameters (البارامترات)",
                "Description (الوصف)",
            ],
            rows: &MACROS,
        },
        Table {
            caption: Some("Theme File Structure"),
            headers: &["File Path", "Description (الوصف)"],
            rows: &FILES,
        },
    ],
    widths: WidthBounds::new(15, 60),
    translated_column: None,
    width_overrides: &[],
}];

pub(super) fn document() -> Document {
    Document {
        file_stem: "04-macros-structure",
        sheets: &SHEETS,
    }
}
