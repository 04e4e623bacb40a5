//! User-facing strings. The page is Spanish-only.

pub const NO_FILE_SELECTED: &str = "No hay archivo seleccionado";

pub const INVALID_FORMAT: &str =
    "El formato del archivo no es válido. Por favor, seleccione un archivo Excel (.xls o .xlsx)";

pub const MUST_SELECT_FILE: &str = "Debe seleccionar un archivo para continuar";

pub const GENERIC_FAILURE: &str =
    "Ocurrió un error al procesar su solicitud. Por favor, inténtelo de nuevo.";

pub const DETAIL_TITLE: &str = "Errores encontrados:";

pub fn file_selected_text(file_name: &str) -> String {
    format!("📄 Archivo seleccionado: {}", file_name)
}

/// Drop-zone hint, e.g. `"Formatos: .xls, .xlsx · Máximo 16MB"`.
pub fn max_size_hint(extensions: &[&str], max_bytes: u64) -> String {
    let formats = extensions
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Formatos: {} · Máximo {}MB", formats, max_bytes / (1024 * 1024))
}
