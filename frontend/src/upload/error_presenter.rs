//! Turns raw error messages into what the error panel shows.
//!
//! Messages coming from the endpoint (or from the page itself) are matched
//! against a fixed table of known texts and replaced by a friendlier sentence.
//! Matching is a substring test in both directions and the first entry that
//! matches wins, so the table order below is part of the behavior.

use common::model::upload::DetailedError;

/// Known raw messages and their rewrites, in match priority order.
pub const FRIENDLY_MESSAGES: [(&str, &str); 11] = [
    (
        "No se ha seleccionado ningún archivo",
        "No has seleccionado ningún archivo para procesar. Por favor, arrastra un archivo Excel o haz clic para seleccionarlo.",
    ),
    (
        "Archivo no válido",
        "El archivo seleccionado no es válido. Asegúrate de que sea un archivo Excel (.xlsx o .xls).",
    ),
    (
        "El formato del archivo no es válido",
        "El archivo debe ser un archivo Excel (.xlsx o .xls). Por favor, verifica el formato y vuelve a intentarlo.",
    ),
    (
        "El archivo es demasiado grande",
        "El archivo excede el tamaño máximo permitido de 16MB. Por favor, comprime el archivo o selecciona uno más pequeño.",
    ),
    (
        "Archivo con formato incorrecto",
        "El archivo no tiene el formato correcto. Debe ser un archivo Excel con exactamente 9 columnas en el orden especificado.",
    ),
    (
        "Campos requeridos faltantes",
        "Faltan campos obligatorios en el formulario. Por favor, completa todos los campos marcados como requeridos.",
    ),
    (
        "Debe seleccionar un archivo para continuar",
        "Para continuar, necesitas seleccionar un archivo Excel válido. Arrastra el archivo o haz clic para seleccionarlo.",
    ),
    (
        "Ocurrió un error al procesar su solicitud",
        "Hubo un problema al procesar tu solicitud. Por favor, verifica que el archivo sea correcto e inténtalo nuevamente.",
    ),
    (
        "El archivo no tiene la estructura correcta",
        "El archivo no tiene la estructura esperada. Verifica que tenga exactamente 9 columnas en el orden correcto.",
    ),
    (
        "No se encontraron registros válidos",
        "No se encontraron registros válidos en el archivo. Verifica que los datos cumplan con los requisitos.",
    ),
    (
        "Se encontraron errores en",
        "Se encontraron errores en el archivo. Revisa los detalles a continuación y corrige los problemas antes de volver a intentarlo.",
    ),
];

/// Everything the error panel needs to render one error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorPayload {
    /// The message as received, kept for logging.
    pub raw_message: String,
    pub friendly_message: String,
    /// One entry per bullet, in input order.
    pub detail_lines: Vec<String>,
}

pub fn present(message: &str, detailed_errors: &[DetailedError]) -> ErrorPayload {
    ErrorPayload {
        raw_message: message.to_string(),
        friendly_message: friendly_message(message),
        detail_lines: detail_lines(detailed_errors),
    }
}

/// Rewritten text for `message`, or `message` itself when nothing matches.
///
/// An empty message is contained in every key and maps to the first entry.
pub fn friendly_message(message: &str) -> String {
    FRIENDLY_MESSAGES
        .iter()
        .find(|(key, _)| message.contains(key) || key.contains(message))
        .map_or_else(|| message.to_string(), |(_, friendly)| friendly.to_string())
}

/// Flattens the detail list into bullet lines.
///
/// Row records expand to one `"Fila N: ..."` line per message. Row `0` and
/// unknown shapes are skipped.
pub fn detail_lines(detailed_errors: &[DetailedError]) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in detailed_errors {
        match entry {
            DetailedError::Line(line) => lines.push(line.clone()),
            DetailedError::Row { fila, errores } if *fila != 0 => {
                lines.extend(errores.iter().map(|e| format!("Fila {}: {}", fila, e)));
            }
            _ => {}
        }
    }
    lines
}
