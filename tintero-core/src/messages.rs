use crate::error::ApiError;

/// Render an [`ApiError`] as the message shown to the end user.
///
/// Validation errors take precedence: when the server sent a field
/// errors map, the first message of the first field wins. Otherwise the
/// HTTP status selects a fixed message, with the server's own message
/// used where the table allows it.
pub fn user_message(error: &ApiError) -> String {
    match error {
        ApiError::Api {
            status,
            message,
            errors,
        } => {
            if errors.is_some() {
                return error
                    .first_validation_message()
                    .map(str::to_owned)
                    .unwrap_or_else(|| message.clone());
            }
            match status {
                400 => server_or(message, "Datos inválidos. Por favor verifica tu información."),
                401 => "Credenciales incorrectas.".to_owned(),
                403 => "No tienes permisos para realizar esta acción.".to_owned(),
                404 => "Recurso no encontrado.".to_owned(),
                422 => server_or(message, "Error de validación."),
                500 => "Error del servidor. Intenta más tarde.".to_owned(),
                _ => server_or(message, "Ocurrió un error inesperado."),
            }
        }
        ApiError::MissingPayload(_) => "Ocurrió un error inesperado.".to_owned(),
        ApiError::Transport(_) | ApiError::Decode(_) => {
            "Error de conexión. Verifica tu internet.".to_owned()
        }
    }
}

fn server_or(message: &str, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_owned()
    } else {
        message.to_owned()
    }
}
