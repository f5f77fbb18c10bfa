//! 报表页
//!
//! 与仪表盘同一套「拉取全量 + 纯折叠」，外加轮询：
//! auto-refresh 开启时按所选间隔（10s/30s/60s/300s，默认 30s）
//! 重复同一轮 fetch-and-reduce。`Interval` 作为 Effect 的返回值
//! 持有，间隔变更 / 开关关闭 / 组件卸载都会把上一只定时器 Drop
//! 掉，轮询随之确定性停止。相邻两次轮询之间不做在途去重，
//! 偶发重叠由后端幂等性兜底。

use crate::auth::{handle_unauthorized, use_auth};
use crate::components::icons::*;
use crate::notify::use_notifications;
use crate::web::Interval;
use ims_shared::report::InventoryReport;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 可选的轮询间隔（秒）
const REFRESH_INTERVALS: &[(u32, &str)] = &[
    (10, "10 秒"),
    (30, "30 秒"),
    (60, "1 分钟"),
    (300, "5 分钟"),
];

/// 默认轮询间隔（秒）
const DEFAULT_INTERVAL_SECS: u32 = 30;

fn status_bar_color(label: &str) -> &'static str {
    match label {
        "IN_STOCK" => "bg-success",
        "LOW_STOCK" => "bg-warning",
        _ => "bg-error",
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();

    let (report, set_report) = signal(InventoryReport::default());
    let (loading, set_loading) = signal(true);
    let (last_updated, set_last_updated) = signal(String::new());
    let (auto_refresh, set_auto_refresh) = signal(true);
    let (interval_secs, set_interval_secs) = signal(DEFAULT_INTERVAL_SECS);

    let fetch_report = move || {
        let state = auth.state.get_untracked();
        if !state.is_authenticated() {
            return;
        }
        let api = auth.api();
        spawn_local(async move {
            match api.list_products().await {
                Ok(products) => {
                    set_report.set(InventoryReport::from_products(&products));
                    set_last_updated
                        .set(String::from(js_sys::Date::new_0().to_locale_time_string("zh-CN")));
                }
                Err(error) => {
                    if error.is_unauthorized() {
                        handle_unauthorized(&auth);
                    } else {
                        notifications.error("加载报表数据失败");
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
            fetch_report();
        }
    });

    // 轮询：返回值持有定时器，Effect 重跑或销毁时上一只被 Drop（即取消）
    Effect::new(move |_| -> Option<Interval> {
        if auto_refresh.get() {
            Some(Interval::from_secs(interval_secs.get(), move || fetch_report()))
        } else {
            None
        }
    });

    // 手动刷新（与轮询互不等待）
    let manual_refresh = move |_| {
        set_loading.set(true);
        fetch_report();
        notifications.success("报表已刷新");
    };

    let total_products = move || report.get().total_products;
    let total_value = move || format!("￥{:.2}", report.get().total_value);
    let low_stock_items = move || report.get().low_stock_items;

    // 价值排名条形图（最高者为满宽）
    let top_bars = move || {
        let report = report.get();
        let max = report.top_products.first().map(|p| p.value).unwrap_or(0.0);
        report
            .top_products
            .iter()
            .map(|p| {
                let pct = if max > 0.0 {
                    (p.value / max * 100.0).round() as u32
                } else {
                    0
                };
                view! {
                    <div>
                        <div class="flex justify-between text-sm mb-1">
                            <span class="font-medium">{p.name.clone()}</span>
                            <span class="text-base-content/60">{format!("￥{:.2}", p.value)}</span>
                        </div>
                        <div class="h-2 rounded-full bg-base-200">
                            <div class="h-2 rounded-full bg-primary" style=format!("width: {pct}%")>
                            </div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    let status_bars = move || {
        let report = report.get();
        let max = report.stock_status.max_count();
        report
            .stock_status
            .entries()
            .iter()
            .map(|(label, count)| {
                let pct = if max > 0 { count * 100 / max } else { 0 };
                let color = format!("h-2 rounded-full {}", status_bar_color(label));
                view! {
                    <div>
                        <div class="flex justify-between text-sm mb-1">
                            <span>{label.clone()}</span>
                            <span class="text-base-content/60">{*count}</span>
                        </div>
                        <div class="h-2 rounded-full bg-base-200">
                            <div class=color style=format!("width: {pct}%")></div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    let category_bars = move || {
        let report = report.get();
        let max = report.categories.max_count();
        report
            .categories
            .entries()
            .iter()
            .map(|(category, count)| {
                let pct = if max > 0 { count * 100 / max } else { 0 };
                view! {
                    <div>
                        <div class="flex justify-between text-sm mb-1">
                            <span>{category.clone()}</span>
                            <span class="text-base-content/60">{format!("{count} 件")}</span>
                        </div>
                        <div class="h-2 rounded-full bg-base-200">
                            <div class="h-2 rounded-full bg-secondary" style=format!("width: {pct}%")>
                            </div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    let top_rows = move || {
        report
            .get()
            .top_products
            .iter()
            .map(|p| {
                view! {
                    <tr>
                        <td class="font-medium">{p.name.clone()}</td>
                        <td>{p.quantity}</td>
                        <td>{format!("￥{:.2}", p.value)}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="space-y-6">
            // 头部：标题 + 实时刷新控制
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body flex-col md:flex-row md:items-center md:justify-between gap-4">
                    <div>
                        <h1 class="card-title text-2xl">"报表分析"</h1>
                        <p class="text-base-content/70">"库存统计与分布"</p>
                        <div class="flex items-center gap-1 mt-2 text-sm text-base-content/50">
                            <Clock attr:class="h-4 w-4" />
                            {move || format!("最后更新：{}", last_updated.get())}
                        </div>
                    </div>
                    <div class="flex items-center gap-3">
                        <label class="label cursor-pointer gap-2">
                            <input
                                type="checkbox"
                                class="checkbox checkbox-primary checkbox-sm"
                                prop:checked=auto_refresh
                                on:change=move |ev| set_auto_refresh.set(event_target_checked(&ev))
                            />
                            <span class="label-text">"自动刷新"</span>
                        </label>

                        <select
                            class="select select-bordered select-sm"
                            prop:value=move || interval_secs.get().to_string()
                            disabled=move || !auto_refresh.get()
                            on:change=move |ev| {
                                let secs = event_target_value(&ev)
                                    .parse::<u32>()
                                    .unwrap_or(DEFAULT_INTERVAL_SECS);
                                set_interval_secs.set(secs);
                            }
                        >
                            {REFRESH_INTERVALS
                                .iter()
                                .map(|(secs, label)| {
                                    view! { <option value=secs.to_string()>{*label}</option> }
                                })
                                .collect_view()}
                        </select>

                        <button class="btn btn-primary btn-sm gap-1" on:click=manual_refresh>
                            <RefreshCw attr:class="h-4 w-4" />
                            "刷新"
                        </button>
                    </div>
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
                        <div class="stat-figure text-success">
                            <DollarSign attr:class="h-8 w-8" />
                        </div>
                        <div class="stat-title">"库存总值"</div>
                        <div class="stat-value text-success text-2xl">{total_value}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-figure text-primary">
                            <Package attr:class="h-8 w-8" />
                        </div>
                        <div class="stat-title">"商品总数"</div>
                        <div class="stat-value text-primary">{total_products}</div>
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
                            <h3 class="card-title">"价值 Top 5"</h3>
                            <div class="space-y-3">{top_bars}</div>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h3 class="card-title">"库存状态分布"</h3>
                            <div class="space-y-3">{status_bars}</div>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"类别分布"</h3>
                        <div class="space-y-3">{category_bars}</div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <h3 class="card-title p-6 pb-2">"价值排名明细"</h3>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"商品"</th>
                                        <th>"数量"</th>
                                        <th>"库存价值"</th>
                                    </tr>
                                </thead>
                                <tbody>{top_rows}</tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
