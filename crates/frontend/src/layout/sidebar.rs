//! Панель настроек: загрузка CSV, переключатель примера, цель KPI

use crate::layout::global_context::{AppGlobalContext, UploadedCsv};
use crate::shared::file_loader::read_file_bytes;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Обработка выбора файла
    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        let Some(file) = input.and_then(|i| i.files()).and_then(|files| files.get(0)) else {
            return;
        };

        ctx.loading_file.set(true);
        ctx.upload_error.set(None);

        spawn_local(async move {
            match read_file_bytes(file.clone()).await {
                Ok(bytes) => {
                    ctx.uploaded.set(Some(UploadedCsv {
                        file_name: file.name(),
                        size_bytes: file.size() as u64,
                        bytes,
                    }));
                    // загруженный файл имеет приоритет над примером
                    ctx.use_sample.set(false);
                }
                Err(e) => {
                    log::error!("Не удалось прочитать файл: {}", e);
                    ctx.upload_error.set(Some(e));
                }
            }
            ctx.loading_file.set(false);
        });
    };

    let handle_reset = move |_| {
        ctx.uploaded.set(None);
        ctx.upload_error.set(None);
        ctx.use_sample.set(true);
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__title">
                {icon("settings")}
                <span>"Настройки"</span>
            </div>

            <div class="sidebar-field">
                <div class="sidebar-field__filebar">
                    <label class="button button--primary sidebar-field__file-btn" for="csv-file-input">
                        {icon("upload")}
                        " Загрузить CSV"
                    </label>
                    <input
                        id="csv-file-input"
                        type="file"
                        accept=".csv"
                        on:change=handle_file_select
                        class="hidden"
                    />
                </div>

                <Show when=move || ctx.loading_file.get()>
                    <Space gap=SpaceGap::Small>
                        <Spinner />
                        <span class="sidebar-field__hint">"Чтение файла..."</span>
                    </Space>
                </Show>

                {move || if let Some(upload) = ctx.uploaded.get() {
                    view! {
                        <div class="sidebar-field__fileinfo">
                            <strong>{upload.file_name}</strong>
                            {format!(" ({:.2} KB)", upload.size_bytes as f64 / 1024.0)}
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <span class="sidebar-field__hint">"Файл не выбран"</span>
                    }.into_any()
                }}

                {move || ctx.upload_error.get().map(|e| {
                    view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{e}</span>
                        </div>
                    }
                })}

                <Show when=move || ctx.uploaded.get().is_some()>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=handle_reset
                    >
                        {icon("x")}
                        " Сбросить файл"
                    </Button>
                </Show>
            </div>

            <div class="sidebar-field">
                <Checkbox checked=ctx.use_sample label="Использовать пример данных" />
            </div>

            <div class="sidebar-field">
                <label class="sidebar-field__label" for="kpi-target-input">
                    "Цель KPI, выручка в месяц"
                </label>
                <input
                    id="kpi-target-input"
                    type="number"
                    min="0"
                    step="100000"
                    class="sidebar-field__input"
                    prop:value=move || ctx.target_input.get()
                    on:input=move |ev| ctx.target_input.set(event_target_value(&ev))
                />
                <span class="sidebar-field__hint">
                    "График достижения пересчитывается сразу после изменения цели"
                </span>
            </div>
        </aside>
    }
}
