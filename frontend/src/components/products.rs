//! 商品列表
//!
//! 拉取全量列表后在客户端做大小写不敏感的子串过滤（名称 + 类别），
//! 每次输入都对保留的完整列表重算——过滤是非破坏性的。
//! 删除需要 delete_products 权限：渲染时决定按钮显隐，动手前再查一次；
//! 删除成功后整表重拉，不做本地乐观移除。

use crate::auth::{handle_unauthorized, use_auth};
use crate::components::icons::*;
use crate::notify::use_notifications;
use crate::web::router::use_router;
use ims_shared::{Permission, Product, StockStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn status_badge_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::InStock => "badge badge-success badge-outline",
        StockStatus::LowStock => "badge badge-warning badge-outline",
        StockStatus::OutOfStock => "badge badge-error badge-outline",
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let router = use_router();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (search_term, set_search_term) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(Option::<&'static str>::None);

    let load_products = move || {
        let api = auth.api();
        set_loading.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            match api.list_products().await {
                Ok(data) => set_products.set(data),
                Err(error) => {
                    if error.is_unauthorized() {
                        handle_unauthorized(&auth);
                    } else if error.is_network() {
                        set_load_error.set(Some("网络错误，请检查连接"));
                    } else {
                        set_load_error.set(Some("加载商品列表失败，请重试"));
                    }
                }
            }
            set_loading.set(false);
        });
    };

    // 初始加载
    Effect::new(move |_| {
        let state = auth.state.get();
        if !state.is_loading && state.is_authenticated() {
            load_products();
        }
    });

    // 非破坏性过滤：完整列表保留在 products 信号里
    let filtered = move || {
        let term = search_term.get().to_lowercase();
        products
            .get()
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term) || p.category.to_lowercase().contains(&term)
            })
            .collect::<Vec<_>>()
    };

    let handle_delete = move |id: i64| {
        // 按钮显隐之外，动手前再查一次权限
        if !auth.has_permission(Permission::DeleteProducts) {
            notifications.error("您没有删除商品的权限");
            return;
        }

        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("确定要删除这个商品吗？").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let api = auth.api();
        spawn_local(async move {
            match api.delete_product(id).await {
                Ok(()) => {
                    notifications.success("商品删除成功");
                    // 重拉整表，不做乐观移除
                    load_products();
                }
                Err(error) => {
                    if error.is_unauthorized() {
                        handle_unauthorized(&auth);
                    } else {
                        notifications.error("删除商品失败，请重试");
                    }
                }
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body flex-row items-center justify-between">
                    <div>
                        <h1 class="card-title text-2xl">"商品管理"</h1>
                        <p class="text-base-content/70">"管理您的库存商品"</p>
                    </div>
                    <Show when=move || auth.has_permission(Permission::CreateProducts)>
                        <button
                            class="btn btn-primary gap-2"
                            on:click=move |_| router.navigate("/products/add")
                        >
                            <Plus attr:class="h-5 w-5" />
                            "新增商品"
                        </button>
                    </Show>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body py-4">
                    <label class="input input-bordered flex items-center gap-2">
                        <Search attr:class="h-5 w-5 text-base-content/50" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="按名称或类别搜索..."
                            on:input=move |ev| set_search_term.set(event_target_value(&ev))
                            prop:value=search_term
                        />
                    </label>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <Show when=move || load_error.get().is_some()>
                        <div class="text-center py-12 space-y-4">
                            <p class="text-error font-medium">
                                {move || load_error.get().unwrap_or_default()}
                            </p>
                            <button class="btn btn-primary btn-sm" on:click=move |_| load_products()>
                                "重试"
                            </button>
                        </div>
                    </Show>

                    <Show when=move || load_error.get().is_none()>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"商品"</th>
                                        <th>"类别"</th>
                                        <th>"单价"</th>
                                        <th>"数量"</th>
                                        <th>"状态"</th>
                                        <Show when=move || auth.has_permission(Permission::EditProducts)>
                                            <th>"操作"</th>
                                        </Show>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || loading.get() && products.with(|p| p.is_empty())>
                                        <tr>
                                            <td colspan="6" class="text-center py-8 text-base-content/50">
                                                <span class="loading loading-spinner loading-md"></span>
                                                " 加载中..."
                                            </td>
                                        </tr>
                                    </Show>
                                    <Show when=move || !loading.get() && filtered().is_empty()>
                                        <tr>
                                            <td colspan="6" class="text-center py-8 text-base-content/50">
                                                "没有找到商品。"
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=filtered
                                        key=|p| p.id
                                        children=move |product| {
                                            let id = product.id;
                                            view! {
                                                <tr>
                                                    <td>
                                                        <div class="font-medium">{product.name.clone()}</div>
                                                        <div class="text-sm text-base-content/50">
                                                            {format!("ID: {id}")}
                                                        </div>
                                                    </td>
                                                    <td>{product.category.clone()}</td>
                                                    <td>{format!("￥{:.2}", product.price)}</td>
                                                    <td>{product.quantity}</td>
                                                    <td>
                                                        <span class=status_badge_class(product.status)>
                                                            {product.status.label()}
                                                        </span>
                                                    </td>
                                                    <Show when=move || auth.has_permission(Permission::EditProducts)>
                                                        <td>
                                                            <div class="flex gap-1">
                                                                <button
                                                                    class="btn btn-ghost btn-sm btn-square text-primary"
                                                                    on:click=move |_| {
                                                                        router.navigate(&format!("/products/edit/{id}"))
                                                                    }
                                                                >
                                                                    <Pencil attr:class="h-4 w-4" />
                                                                </button>
                                                                <Show when=move || {
                                                                    auth.has_permission(Permission::DeleteProducts)
                                                                }>
                                                                    <button
                                                                        class="btn btn-ghost btn-sm btn-square text-error"
                                                                        on:click=move |_| handle_delete(id)
                                                                    >
                                                                        <Trash2 attr:class="h-4 w-4" />
                                                                    </button>
                                                                </Show>
                                                            </div>
                                                        </td>
                                                    </Show>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
