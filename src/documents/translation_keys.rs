//! Document 03: the `data-i18n` translation keys with both language values.
//!
//! One table, grouped by page section; the Arabic column is rendered
//! right-aligned.

use crate::style::{NAVY, WidthBounds};
use crate::table::{Document, Row, Sheet, Table};

static TRANSLATIONS: [Row; 81] = [
    Row::Section("Navigation"),
    Row::Data(&["nav.brand", "Farabi Academy", "أكاديمية الفارابي", "header, footer"]),
    Row::Data(&["nav.aboutUs", "About Us", "من نحن", "header, footer"]),
    Row::Data(&["nav.ourCourses", "Our Courses", "دوراتنا", "header, footer"]),
    Row::Data(&["nav.successStories", "Success Stories", "قصص النجاح", "header, footer"]),
    Row::Data(&["nav.contactUs", "Contact Us", "اتصل بنا", "header, footer"]),
    Row::Data(&["nav.registerNow", "Register Now", "سجل الآن", "header"]),
    Row::Data(&["nav.login", "Login", "تسجيل الدخول", "header"]),
    Row::Section("Hero"),
    Row::Data(&[
        "hero.title",
        "Transform Your Future with Excellence",
        "حوّل مستقبلك مع التميز",
        "index",
    ]),
    Row::Data(&[
        "hero.subtitle",
        "Join thousands of students who have achieved their dreams...",
        "انضم إلى آلاف الطلاب الذين حققوا أحلامهم...",
        "index",
    ]),
    Row::Data(&["hero.ctaButton", "Start Now", "ابدأ الآن", "index"]),
    Row::Section("Courses"),
    Row::Data(&["courses.title", "What We Offer", "ما نقدمه", "index"]),
    Row::Data(&[
        "courses.subtitle",
        "Explore our comprehensive range of online courses...",
        "استكشف مجموعتنا الشاملة من الدورات...",
        "index",
    ]),
    Row::Data(&["courses.viewDetails", "View Details", "عرض التفاصيل", "index"]),
    Row::Data(&[
        "courses.course1.title",
        "Web Development Mastery",
        "احتراف تطوير الويب",
        "index",
    ]),
    Row::Data(&[
        "courses.course1.description",
        "Learn HTML, CSS, JavaScript, and React...",
        "تعلم HTML و CSS و JavaScript و React...",
        "index",
    ]),
    Row::Data(&[
        "courses.course2.title",
        "Digital Marketing Pro",
        "التسويق الرقمي المحترف",
        "index",
    ]),
    Row::Data(&[
        "courses.course2.description",
        "Master SEO, social media marketing...",
        "أتقن تحسين محركات البحث والتسويق...",
        "index",
    ]),
    Row::Data(&[
        "courses.course3.title",
        "Graphic Design Fundamentals",
        "أساسيات التصميم الجرافيكي",
        "index",
    ]),
    Row::Data(&[
        "courses.course3.description",
        "Create stunning visuals with Adobe...",
        "أنشئ تصاميم مذهلة باستخدام Adobe...",
        "index",
    ]),
    Row::Data(&["courses.course4.title", "Business Management", "إدارة الأعمال", "index"]),
    Row::Data(&[
        "courses.course4.description",
        "Learn essential business skills...",
        "تعلم مهارات الأعمال الأساسية...",
        "index",
    ]),
    Row::Data(&[
        "courses.course5.title",
        "Photography Masterclass",
        "دورة التصوير الاحترافي",
        "index",
    ]),
    Row::Data(&[
        "courses.course5.description",
        "From camera basics to professional...",
        "من أساسيات الكاميرا إلى تقنيات...",
        "index",
    ]),
    Row::Data(&[
        "courses.course6.title",
        "Data Science & Analytics",
        "علم البيانات والتحليلات",
        "index",
    ]),
    Row::Data(&[
        "courses.course6.description",
        "Master Python, SQL, and data visualization...",
        "أتقن Python و SQL وتصور البيانات...",
        "index",
    ]),
    Row::Section("Stats"),
    Row::Data(&["stats.students", "Students", "طالب", "index"]),
    Row::Data(&["stats.views", "Views", "مشاهدة", "index"]),
    Row::Data(&["stats.courses", "Courses", "دورة", "index"]),
    Row::Data(&["stats.instructors", "Instructors", "مدرب", "index"]),
    Row::Data(&["stats.satisfaction", "Satisfaction", "رضا", "index"]),
    Row::Section("Reviews"),
    Row::Data(&["reviews.title", "What Our Students Say", "ماذا يقول طلابنا", "index"]),
    Row::Data(&[
        "reviews.subtitle",
        "Real stories from real students...",
        "قصص حقيقية من طلاب حقيقيين...",
        "index",
    ]),
    Row::Section("Why Choose Us"),
    Row::Data(&["whyChoose.title", "Why Choose Us", "لماذا تختارنا", "index"]),
    Row::Data(&[
        "whyChoose.subtitle",
        "Discover what makes our academy...",
        "اكتشف ما يجعل أكاديميتنا...",
        "index",
    ]),
    Row::Data(&["whyChoose.feature1Title", "Expert Instructors", "مدربون خبراء", "index"]),
    Row::Data(&[
        "whyChoose.feature1Desc",
        "Learn from industry professionals...",
        "تعلم من محترفي الصناعة...",
        "index",
    ]),
    Row::Data(&["whyChoose.feature2Title", "Flexible Learning", "تعلم مرن", "index"]),
    Row::Data(&[
        "whyChoose.feature2Desc",
        "Study at your own pace...",
        "ادرس بالسرعة التي تناسبك...",
        "index",
    ]),
    Row::Data(&["whyChoose.feature3Title", "Lifetime Access", "وصول مدى الحياة", "index"]),
    Row::Data(&[
        "whyChoose.feature3Desc",
        "Get unlimited access...",
        "احصل على وصول غير محدود...",
        "index",
    ]),
    Row::Data(&["whyChoose.feature4Title", "Certification", "شهادات معترف بها", "index"]),
    Row::Data(&[
        "whyChoose.feature4Desc",
        "Earn recognized certificates...",
        "احصل على شهادات معترف بها...",
        "index",
    ]),
    Row::Data(&["whyChoose.feature5Title", "Community Support", "دعم المجتمع", "index"]),
    Row::Data(&[
        "whyChoose.feature5Desc",
        "Join a vibrant community...",
        "انضم إلى مجتمع نابض بالحياة...",
        "index",
    ]),
    Row::Data(&["whyChoose.feature6Title", "Affordable Pricing", "أسعار معقولة", "index"]),
    Row::Data(&[
        "whyChoose.feature6Desc",
        "Quality education shouldn't break...",
        "التعليم الجيد لا يجب أن يكلف...",
        "index",
    ]),
    Row::Section("Contact"),
    Row::Data(&["contact.title", "Get In Touch", "تواصل معنا", "index"]),
    Row::Data(&[
        "contact.subtitle",
        "Have questions? We'd love to hear from you...",
        "لديك أسئلة؟ نحب أن نسمع منك...",
        "index",
    ]),
    Row::Data(&["contact.namePlaceholder", "Your Name", "اسمك", "index"]),
    Row::Data(&["contact.emailPlaceholder", "Your Email", "بريدك الإلكتروني", "index"]),
    Row::Data(&["contact.messagePlaceholder", "Your Message", "رسالتك", "index"]),
    Row::Data(&["contact.sendButton", "Send Message", "إرسال رسالة", "index"]),
    Row::Data(&[
        "contact.successMessage",
        "Thank you! We'll get back to you soon.",
        "شكراً لك! سنعاود الاتصال بك قريباً.",
        "index (toast)",
    ]),
    Row::Section("FAQ"),
    Row::Data(&["faq.title", "Frequently Asked Questions", "الأسئلة الشائعة", "index"]),
    Row::Data(&[
        "faq.subtitle",
        "Find answers to common questions...",
        "اعثر على إجابات للأسئلة الشائعة...",
        "index",
    ]),
    Row::Data(&["faq.q1", "How do I enroll in a course?", "كيف أسجل في دورة؟", "index"]),
    Row::Data(&[
        "faq.a1",
        "Simply click on the 'Register Now' button...",
        "ببساطة انقر على زر 'سجل الآن'...",
        "index",
    ]),
    Row::Data(&[
        "faq.q2",
        "Can I access courses on mobile devices?",
        "هل يمكنني الوصول إلى الدورات على المحمول؟",
        "index",
    ]),
    Row::Data(&[
        "faq.a2",
        "Yes! Our platform is fully responsive...",
        "نعم! منصتنا متجاوبة تماماً...",
        "index",
    ]),
    Row::Data(&["faq.q3", "Do you offer refunds?", "هل تقدمون استرداد الأموال؟", "index"]),
    Row::Data(&[
        "faq.a3",
        "We offer a 30-day money-back guarantee...",
        "نحن نقدم ضمان استرداد الأموال لمدة 30 يوماً...",
        "index",
    ]),
    Row::Data(&[
        "faq.q4",
        "Are the certificates recognized?",
        "هل الشهادات معترف بها؟",
        "index",
    ]),
    Row::Data(&[
        "faq.a4",
        "Yes, our certificates are recognized...",
        "نعم، شهاداتنا معترف بها...",
        "index",
    ]),
    Row::Data(&[
        "faq.q5",
        "How long do I have access to a course?",
        "كم من الوقت لدي للوصول إلى الدورة؟",
        "index",
    ]),
    Row::Data(&[
        "faq.a5",
        "Once you enroll, you have lifetime access...",
        "بمجرد تسجيلك، وصول مدى الحياة...",
        "index",
    ]),
    Row::Data(&[
        "faq.q6",
        "Can I interact with instructors?",
        "هل يمكنني التفاعل مع المدربين؟",
        "index",
    ]),
    Row::Data(&[
        "faq.a6",
        "Absolutely! You can ask questions...",
        "بالتأكيد! يمكنك طرح الأسئلة...",
        "index",
    ]),
    Row::Section("Footer"),
    Row::Data(&[
        "footer.description",
        "Empowering learners worldwide...",
        "تمكين المتعلمين في جميع أنحاء العالم...",
        "footer",
    ]),
    Row::Data(&["footer.quickLinks", "Quick Links", "روابط سريعة", "footer"]),
    Row::Data(&["footer.followUs", "Follow Us", "تابعنا", "footer"]),
    Row::Data(&[
        "footer.copyright",
        "© 2026 Farabi Academy. All rights reserved.",
        "© 2026 أكاديمية الفارابي. جميع الحقوق محفوظة.",
        "footer",
    ]),
    Row::Data(&["floatingCta", "Enroll Now", "سجل الآن", "floating-buttons"]),
];

static SHEETS: [Sheet; 1] = [Sheet {
    name: "Translation Keys",
    tab_color: NAVY,
    title: "Translation Keys (مفاتيح الترجمة data-i18n)",
    tables: &[Table {
        caption: None,
        headers: &[
            "Key (المفتاح)",
            "English (الإنجليزي)",
            "Arabic (العربي)",
            "Used In (مُستخدم في)",
        ],
        rows: &TRANSLATIONS,
    }],
    widths: WidthBounds::new(15, 55),
    // The Arabic value column reads right-to-left.
    translated_column: Some(2),
    // Both language columns are pinned wide for side-by-side review.
    width_overrides: &[(1, 45.0), (2, 45.0)],
}];

pub(super) fn document() -> Document {
    Document {
        file_stem: "03-translation-keys",
        sheets: &SHEETS,
    }
}
