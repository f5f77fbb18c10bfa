//! 商品表单（新增 / 编辑共用）
//!
//! `id` 存在即编辑模式：先按 id 加载既有商品填充表单。
//! 提交前走共享校验，不通过就逐字段提示并拦下请求；
//! 编辑模式加载失败时表单保持禁用——绝不静默呈现一个
//! 看似可编辑实则已坏的表单。

use crate::auth::{handle_unauthorized, use_auth};
use crate::components::icons::ArrowLeft;
use crate::notify::use_notifications;
use crate::web::router::use_router;
use ims_shared::validate::{FieldErrors, ProductFormInput, validate_product_form};
use ims_shared::{CATEGORIES, ErrorKind, Product, ProductPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 表单状态
///
/// 用 RwSignal 聚合成 Copy 结构体，方便整体在闭包间传递。
#[derive(Clone, Copy)]
struct FormState {
    name: RwSignal<String>,
    category: RwSignal<String>,
    price: RwSignal<String>,
    quantity: RwSignal<String>,
    description: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
}

impl FormState {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            errors: RwSignal::new(FieldErrors::default()),
        }
    }

    /// 编辑模式：用既有商品填充
    fn fill(&self, product: &Product) {
        self.name.set(product.name.clone());
        self.category.set(product.category.clone());
        self.price.set(product.price.to_string());
        self.quantity.set(product.quantity.to_string());
        self.description
            .set(product.description.clone().unwrap_or_default());
    }

    fn to_input(&self) -> ProductFormInput {
        ProductFormInput {
            name: self.name.get_untracked(),
            category: self.category.get_untracked(),
            price: self.price.get_untracked(),
            quantity: self.quantity.get_untracked(),
            description: self.description.get_untracked(),
        }
    }

    /// 提交前校验；失败时写入逐字段错误并返回 None
    fn validate(&self) -> Option<ProductPayload> {
        match validate_product_form(&self.to_input()) {
            Ok(payload) => {
                self.errors.set(FieldErrors::default());
                Some(payload)
            }
            Err(errors) => {
                self.errors.set(errors);
                None
            }
        }
    }
}

#[component]
pub fn ProductFormPage(
    /// 编辑的商品 id；缺省即新增模式
    #[prop(optional)]
    id: Option<i64>,
) -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let router = use_router();

    let form = FormState::new();
    let is_edit = id.is_some();
    let (loading, set_loading) = signal(is_edit);
    let (load_failed, set_load_failed) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);

    // 编辑模式：先加载既有商品
    if let Some(id) = id {
        Effect::new(move |_| {
            let state = auth.state.get();
            if state.is_loading || !state.is_authenticated() {
                return;
            }
            let api = auth.api();
            spawn_local(async move {
                match api.get_product(id).await {
                    Ok(product) => form.fill(&product),
                    Err(error) => {
                        set_load_failed.set(true);
                        if error.is_unauthorized() {
                            handle_unauthorized(&auth);
                        } else {
                            notifications.error("加载商品失败，请重试");
                        }
                    }
                }
                set_loading.set(false);
            });
        });
    }

    // 表单整体不可用：加载中，或编辑模式加载失败
    let disabled = move || loading.get() || load_failed.get();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // 本地校验不通过：逐字段提示，不触发后端请求
        let Some(payload) = form.validate() else {
            return;
        };

        set_is_submitting.set(true);
        let api = auth.api();
        spawn_local(async move {
            let result = match id {
                Some(id) => api.update_product(id, payload).await.map(|_| ()),
                None => api.create_product(payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    notifications.success(if is_edit { "商品更新成功" } else { "商品创建成功" });
                    router.navigate("/products");
                }
                Err(error) => match error.kind {
                    ErrorKind::Unauthorized => handle_unauthorized(&auth),
                    ErrorKind::BadRequest => notifications.error("数据无效，请检查输入"),
                    ErrorKind::Network => notifications.error("网络错误，请检查连接"),
                    _ => {
                        if error.message.is_empty() {
                            notifications.error(if is_edit {
                                "更新商品失败"
                            } else {
                                "创建商品失败"
                            });
                        } else {
                            notifications.error(error.message.clone());
                        }
                    }
                },
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body flex-row items-center gap-4">
                    <button
                        class="btn btn-ghost btn-square"
                        on:click=move |_| router.navigate("/products")
                    >
                        <ArrowLeft attr:class="h-5 w-5" />
                    </button>
                    <div>
                        <h1 class="card-title text-2xl">
                            {if is_edit { "编辑商品" } else { "新增商品" }}
                        </h1>
                        <p class="text-base-content/70">
                            {if is_edit { "更新商品信息" } else { "录入新的库存商品" }}
                        </p>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! {
                            <div class="flex items-center justify-center h-64">
                                <span class="loading loading-spinner loading-lg text-primary"></span>
                            </div>
                        }
                    }
                >
                    <form class="card-body space-y-4" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">"商品名称 *"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                placeholder="请输入商品名称"
                                class=move || {
                                    if form.errors.get().name.is_some() {
                                        "input input-bordered input-error"
                                    } else {
                                        "input input-bordered"
                                    }
                                }
                                prop:value=form.name
                                disabled=disabled
                                on:input=move |ev| {
                                    form.name.set(event_target_value(&ev));
                                    // 输入即清除该字段错误
                                    form.errors.update(|e| e.name = None);
                                }
                            />
                            <Show when=move || form.errors.get().name.is_some()>
                                <span class="label-text-alt text-error mt-1">
                                    {move || form.errors.get().name.unwrap_or_default()}
                                </span>
                            </Show>
                        </div>

                        <div class="form-control">
                            <label class="label" for="category">
                                <span class="label-text">"类别 *"</span>
                            </label>
                            <select
                                id="category"
                                class=move || {
                                    if form.errors.get().category.is_some() {
                                        "select select-bordered select-error"
                                    } else {
                                        "select select-bordered"
                                    }
                                }
                                prop:value=form.category
                                disabled=disabled
                                on:change=move |ev| {
                                    form.category.set(event_target_value(&ev));
                                    form.errors.update(|e| e.category = None);
                                }
                            >
                                <option value="">"请选择类别"</option>
                                {CATEGORIES
                                    .iter()
                                    .map(|category| {
                                        view! { <option value=*category>{*category}</option> }
                                    })
                                    .collect_view()}
                            </select>
                            <Show when=move || form.errors.get().category.is_some()>
                                <span class="label-text-alt text-error mt-1">
                                    {move || form.errors.get().category.unwrap_or_default()}
                                </span>
                            </Show>
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label" for="price">
                                    <span class="label-text">"单价 *"</span>
                                </label>
                                <input
                                    id="price"
                                    type="number"
                                    step="0.01"
                                    min="0"
                                    placeholder="0.00"
                                    class=move || {
                                        if form.errors.get().price.is_some() {
                                            "input input-bordered input-error"
                                        } else {
                                            "input input-bordered"
                                        }
                                    }
                                    prop:value=form.price
                                    disabled=disabled
                                    on:input=move |ev| {
                                        form.price.set(event_target_value(&ev));
                                        form.errors.update(|e| e.price = None);
                                    }
                                />
                                <Show when=move || form.errors.get().price.is_some()>
                                    <span class="label-text-alt text-error mt-1">
                                        {move || form.errors.get().price.unwrap_or_default()}
                                    </span>
                                </Show>
                            </div>

                            <div class="form-control">
                                <label class="label" for="quantity">
                                    <span class="label-text">"数量 *"</span>
                                </label>
                                <input
                                    id="quantity"
                                    type="number"
                                    min="0"
                                    placeholder="0"
                                    class=move || {
                                        if form.errors.get().quantity.is_some() {
                                            "input input-bordered input-error"
                                        } else {
                                            "input input-bordered"
                                        }
                                    }
                                    prop:value=form.quantity
                                    disabled=disabled
                                    on:input=move |ev| {
                                        form.quantity.set(event_target_value(&ev));
                                        form.errors.update(|e| e.quantity = None);
                                    }
                                />
                                <Show when=move || form.errors.get().quantity.is_some()>
                                    <span class="label-text-alt text-error mt-1">
                                        {move || form.errors.get().quantity.unwrap_or_default()}
                                    </span>
                                </Show>
                            </div>
                        </div>

                        <div class="form-control">
                            <label class="label" for="description">
                                <span class="label-text">"描述（可选）"</span>
                            </label>
                            <textarea
                                id="description"
                                rows="4"
                                class="textarea textarea-bordered"
                                placeholder="请输入商品描述"
                                prop:value=form.description
                                disabled=disabled
                                on:input=move |ev| form.description.set(event_target_value(&ev))
                            ></textarea>
                        </div>

                        <div class="flex justify-end gap-3 pt-4 border-t border-base-200">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| router.navigate("/products")
                            >
                                "取消"
                            </button>
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled=move || is_submitting.get() || disabled()
                            >
                                {move || {
                                    if is_submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            {if is_edit { "更新中..." } else { "创建中..." }}
                                        }
                                            .into_any()
                                    } else if is_edit {
                                        "更新商品".into_any()
                                    } else {
                                        "创建商品".into_any()
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </Show>
            </div>
        </div>
    }
}
