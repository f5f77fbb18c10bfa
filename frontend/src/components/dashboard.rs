//! 仪表盘
//!
//! 挂载后拉取全量商品，套用共享聚合逻辑得到三项统计；
//! 另有最近动态占位与按权限显隐的快捷入口。

use crate::auth::{handle_unauthorized, use_auth};
use crate::components::icons::*;
use crate::notify::use_notifications;
use crate::web::router::use_router;
use ims_shared::Permission;
use ims_shared::report::InventoryReport;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let router = use_router();

    let (report, set_report) = signal(InventoryReport::default());
    let (loading, set_loading) = signal(true);

    // 初始加载：拉取全量商品并做一次纯折叠
    Effect::new(move |_| {
        let state = auth.state.get();
        if state.is_loading || !state.is_authenticated() {
            return;
        }
        let api = auth.api();
        spawn_local(async move {
            match api.list_products().await {
                Ok(products) => set_report.set(InventoryReport::from_products(&products)),
                Err(error) => {
                    if error.is_unauthorized() {
                        handle_unauthorized(&auth);
                    } else {
                        notifications.error("加载仪表盘数据失败");
                    }
                }
            }
            set_loading.set(false);
        });
    });

    let total_products = move || report.get().total_products;
    let total_value = move || format!("￥{:.2}", report.get().total_value);
    let low_stock_items = move || report.get().low_stock_items;

    view! {
        <div class="space-y-6">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h1 class="card-title text-2xl">"仪表盘"</h1>
                    <p class="text-base-content/70">"库存概况一览"</p>
                </div>
            </div>

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
                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-figure text-primary">
                            <Package attr:class="h-8 w-8" />
                        </div>
                        <div class="stat-title">"商品总数"</div>
                        <div class="stat-value text-primary">{total_products}</div>
                    </div>

                    <div class="stat">
                        <div class="stat-figure text-success">
                            <DollarSign attr:class="h-8 w-8" />
                        </div>
                        <div class="stat-title">"库存总值"</div>
                        <div class="stat-value text-success text-2xl">{total_value}</div>
                    </div>

                    <div class="stat">
                        <div class="stat-figure text-warning">
                            <AlertTriangle attr:class="h-8 w-8" />
                        </div>
                        <div class="stat-title">"低库存商品"</div>
                        <div class="stat-value text-warning">{low_stock_items}</div>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h3 class="card-title">"最近动态"</h3>
                            <ul class="space-y-2 text-sm">
                                <li class="flex justify-between border-b border-base-200 pb-2">
                                    <span>"商品数据已加载"</span>
                                    <span class="text-base-content/50">
                                        {move || format!("{} 件商品", total_products())}
                                    </span>
                                </li>
                                <li class="flex justify-between">
                                    <span>"系统就绪"</span>
                                    <span class="text-base-content/50">"今天"</span>
                                </li>
                            </ul>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h3 class="card-title">"快捷入口"</h3>
                            <div class="flex flex-col gap-2">
                                <button
                                    class="btn btn-outline justify-start gap-2"
                                    on:click=move |_| router.navigate("/products")
                                >
                                    <Package attr:class="h-4 w-4" />
                                    "管理商品"
                                </button>
                                <button
                                    class="btn btn-outline justify-start gap-2"
                                    on:click=move |_| router.navigate("/reports")
                                >
                                    <BarChart3 attr:class="h-4 w-4" />
                                    "查看报表"
                                </button>
                                <Show when=move || auth.has_permission(Permission::CreateProducts)>
                                    <button
                                        class="btn btn-primary justify-start gap-2"
                                        on:click=move |_| router.navigate("/products/add")
                                    >
                                        <Plus attr:class="h-4 w-4" />
                                        "新增商品"
                                    </button>
                                </Show>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
