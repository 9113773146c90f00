const SAD: &[&str] = &["triste", "mal", "deprimido"];
const HAPPY: &[&str] = &["feliz", "contento", "alegre"];

pub const REPLY_SAD: &str =
    "Lamento que te sientas así 😔, recuerda que todo mejora con el tiempo. Estoy aquí para escucharte.";
pub const REPLY_HAPPY: &str = "¡Qué bueno escuchar eso! 😄 Mantén esa energía positiva.";
pub const REPLY_DEFAULT: &str = "Entiendo lo que dices 😊. Cuéntame más sobre cómo te sientes.";

/// Fixed keyword table, first matching set wins. Matching is
/// case-insensitive substring containment, nothing smarter.
pub fn respond(user_text: &str) -> &'static str {
    let text = user_text.to_lowercase();
    if SAD.iter().any(|w| text.contains(w)) {
        REPLY_SAD
    } else if HAPPY.iter().any(|w| text.contains(w)) {
        REPLY_HAPPY
    } else {
        REPLY_DEFAULT
    }
}
