//! Static bilingual (Arabic / English) console text.

pub const RULE_WIDTH: usize = 50;

pub const BANNER_AR: &str = "نظام كاشير بسيط - تشغيل محلي";
pub const BANNER_EN: &str = "Simple Cashier System - Local Run";

pub const MENU_TITLE: &str = "اختر عملية / Choose action:";
pub const MENU_VIEW: &str = "1) عرض السلة / View cart";
pub const MENU_ADD: &str = "2) إضافة صنف / Add item";
pub const MENU_UPDATE: &str = "3) تعديل الكمية / Update quantity";
pub const MENU_REMOVE: &str = "4) حذف صنف / Remove item";
pub const MENU_DISCOUNT: &str = "5) إضافة خصم % / Set discount %";
pub const MENU_TAX: &str = "6) إضافة ضريبة % / Set tax %";
pub const MENU_CHECKOUT: &str = "7) إنهاء وحفظ الفاتورة / Checkout & save";
pub const MENU_CLEAR: &str = "8) تفريغ السلة / Clear cart";
pub const MENU_EXIT: &str = "0) خروج / Exit";

pub const PROMPT_CHOICE: &str = "\nاختيارك / Your choice: ";
pub const PROMPT_NAME: &str = "اسم الصنف / Item name: ";
pub const PROMPT_PRICE: &str = "سعر الصنف / Item price: ";
pub const PROMPT_QUANTITY: &str = "الكمية / Quantity: ";
pub const PROMPT_NEW_QUANTITY: &str = "الكمية الجديدة / New quantity: ";
pub const PROMPT_DISCOUNT: &str = "نسبة الخصم % / Discount %: ";
pub const PROMPT_TAX: &str = "نسبة الضريبة % / Tax %: ";

pub const CART_EMPTY: &str = "السلة فارغة / Cart is empty.";
pub const CART_CURRENT: &str = "السلة الحالية / Current cart:";

pub const WARN_NOT_A_NUMBER: &str = "⚠️  أدخل رقم صالح / Enter a valid number.";
pub const WARN_NEGATIVE: &str = "⚠️  الرقم يجب أن يكون موجب / Must be non-negative.";
pub const WARN_NOT_AN_INTEGER: &str = "⚠️  أدخل رقم صحيح / Enter an integer.";
pub const WARN_NAME_REQUIRED: &str = "⚠️  اسم الصنف مطلوب / Item name is required.";
pub const WARN_QUANTITY_POSITIVE: &str =
    "⚠️  الكمية يجب أن تكون أكبر من صفر / Quantity must be > 0.";
pub const WARN_NOT_FOUND: &str = "⚠️  الصنف غير موجود / Item not found.";
pub const WARN_CART_EMPTY: &str = "⚠️  السلة فارغة / Cart is empty.";
pub const WARN_INVALID_CHOICE: &str = "⚠️  اختيار غير صالح / Invalid choice.";

pub const OK_ADDED: &str = "✅ تمت الإضافة / Item added.";
pub const OK_UPDATED: &str = "✅ تم التحديث / Quantity updated.";
pub const OK_REMOVED: &str = "✅ تم الحذف / Item removed.";
pub const OK_DISCOUNT: &str = "✅ تم تحديث الخصم / Discount updated.";
pub const OK_TAX: &str = "✅ تم تحديث الضريبة / Tax updated.";
pub const OK_SAVED: &str = "✅ تم حفظ الفاتورة / Receipt saved:";
pub const OK_CLEARED: &str = "✅ تم تفريغ السلة / Cart cleared.";

pub const GOODBYE: &str = "مع السلامة / Goodbye!";
