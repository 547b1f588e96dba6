//! Static translation tables for the three supported interface languages.
//!
//! Lookup falls back to English and finally to the key itself, so a missing
//! entry degrades to a readable label instead of an error.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use crate::state::lang::Language;

/// Look up `key` for `lang`.
#[must_use]
pub fn t<'a>(lang: Language, key: &'a str) -> &'a str {
    lookup(lang, key)
        .or_else(|| lookup(Language::En, key))
        .unwrap_or(key)
}

fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    let table = match lang {
        Language::En => EN,
        Language::Ar => AR,
        Language::Id => ID,
    };
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

const EN: &[(&str, &str)] = &[
    ("dashboard", "Dashboard"),
    ("liveChat", "Live Chat"),
    ("whatsAppChat", "WhatsApp Chat"),
    ("broadcast", "Broadcast"),
    ("contacts", "Contacts"),
    ("fileManager", "File Manager"),
    ("users", "Users"),
    ("teams", "Teams"),
    ("signOut", "Sign out"),
    ("loading", "Loading…"),
    ("loginTitle", "Login to your account"),
    ("loginSubtitle", "Sign in to your account and start the adventure"),
    ("phone", "Phone number"),
    ("sendOtp", "Send code"),
    ("otpCode", "Verification code"),
    ("verifyAndLogin", "Verify & Login to your Account"),
    ("verifying", "Verifying…"),
    ("general", "General"),
    ("workspace", "Workspace"),
    ("send", "Send"),
    ("noMessages", "No messages yet"),
];

const AR: &[(&str, &str)] = &[
    ("dashboard", "لوحة التحكم"),
    ("liveChat", "الدردشة المباشرة"),
    ("whatsAppChat", "دردشة واتساب"),
    ("broadcast", "البث"),
    ("contacts", "جهات الاتصال"),
    ("fileManager", "مدير الملفات"),
    ("users", "المستخدمون"),
    ("teams", "الفرق"),
    ("signOut", "تسجيل الخروج"),
    ("loading", "جارٍ التحميل…"),
    ("loginTitle", "تسجيل الدخول إلى حسابك"),
    ("loginSubtitle", "سجّل الدخول إلى حسابك وابدأ"),
    ("phone", "رقم الهاتف"),
    ("sendOtp", "إرسال الرمز"),
    ("otpCode", "رمز التحقق"),
    ("verifyAndLogin", "تحقّق وسجّل الدخول إلى حسابك"),
    ("verifying", "جارٍ التحقق…"),
    ("general", "عام"),
    ("workspace", "مساحة العمل"),
    ("send", "إرسال"),
    ("noMessages", "لا توجد رسائل بعد"),
];

const ID: &[(&str, &str)] = &[
    ("dashboard", "Dasbor"),
    ("liveChat", "Obrolan Langsung"),
    ("whatsAppChat", "Obrolan WhatsApp"),
    ("broadcast", "Siaran"),
    ("contacts", "Kontak"),
    ("fileManager", "Pengelola Berkas"),
    ("users", "Pengguna"),
    ("teams", "Tim"),
    ("signOut", "Keluar"),
    ("loading", "Memuat…"),
    ("loginTitle", "Masuk ke akun Anda"),
    ("loginSubtitle", "Masuk ke akun Anda dan mulai"),
    ("phone", "Nomor telepon"),
    ("sendOtp", "Kirim kode"),
    ("otpCode", "Kode verifikasi"),
    ("verifyAndLogin", "Verifikasi & Masuk"),
    ("verifying", "Memverifikasi…"),
    ("general", "Umum"),
    ("workspace", "Ruang Kerja"),
    ("send", "Kirim"),
    ("noMessages", "Belum ada pesan"),
];
