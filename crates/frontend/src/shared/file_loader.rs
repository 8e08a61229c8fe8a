//! Чтение выбранного пользователем файла в память

use wasm_bindgen_futures::JsFuture;

/// Читает файл из `<input type="file">` как массив байт.
/// Разбор CSV выполняется дальше, в crate contracts.
pub async fn read_file_bytes(file: web_sys::File) -> Result<Vec<u8>, String> {
    // Читаем файл как ArrayBuffer
    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Ошибка чтения файла: {:?}", e))?;

    // Конвертируем ArrayBuffer в Vec<u8>
    let uint8_array = js_sys::Uint8Array::new(&array_buffer);
    let mut bytes = vec![0; uint8_array.length() as usize];
    uint8_array.copy_to(&mut bytes);

    Ok(bytes)
}
