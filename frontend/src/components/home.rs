//! 公开首页
//!
//! 未登录也可访问的产品介绍页：Hero、数据带、功能卡片。
//! 行动按钮随认证状态切换（登录 / 进入仪表盘）。

use crate::auth::use_auth;
use crate::components::icons::*;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let is_authenticated = move || auth.state.get().is_authenticated();

    view! {
        <div class="min-h-screen bg-base-200">
            // Hero
            <section class="hero py-20 bg-base-100">
                <div class="hero-content text-center">
                    <div class="max-w-2xl">
                        <div class="flex justify-center mb-6">
                            <div class="p-4 bg-primary/10 rounded-3xl text-primary">
                                <Package attr:class="h-12 w-12" />
                            </div>
                        </div>
                        <h1 class="text-5xl font-bold">"IMS 库存管理系统"</h1>
                        <p class="py-6 text-base-content/70 text-lg">
                            "集商品管理、实时报表与角色权限于一体的轻量库存方案，"
                            "让每一件库存都有迹可循。"
                        </p>
                        <div class="flex justify-center gap-3">
                            <Show
                                when=is_authenticated
                                fallback=move || {
                                    view! {
                                        <button
                                            class="btn btn-primary btn-lg"
                                            on:click=move |_| router.navigate("/login")
                                        >
                                            "立即登录"
                                        </button>
                                    }
                                }
                            >
                                <button
                                    class="btn btn-primary btn-lg"
                                    on:click=move |_| router.navigate("/dashboard")
                                >
                                    "进入仪表盘"
                                </button>
                            </Show>
                        </div>
                    </div>
                </div>
            </section>

            // 数据带
            <section class="py-12">
                <div class="max-w-4xl mx-auto px-4">
                    <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                        <div class="stat place-items-center">
                            <div class="stat-value text-primary">"500+"</div>
                            <div class="stat-title">"在管商品"</div>
                        </div>
                        <div class="stat place-items-center">
                            <div class="stat-value text-secondary">"7x24"</div>
                            <div class="stat-title">"随时可用"</div>
                        </div>
                        <div class="stat place-items-center">
                            <div class="stat-value text-accent">"99.9%"</div>
                            <div class="stat-title">"数据准确率"</div>
                        </div>
                    </div>
                </div>
            </section>

            // 功能卡片
            <section class="py-12">
                <div class="max-w-5xl mx-auto px-4">
                    <h2 class="text-3xl font-bold text-center mb-10">"核心功能"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <div class="w-12 h-12 bg-primary rounded-lg flex items-center justify-center text-primary-content mb-2">
                                    <Package attr:class="h-6 w-6" />
                                </div>
                                <h3 class="card-title">"商品管理"</h3>
                                <p class="text-base-content/70">
                                    "增删改查一应俱全，搜索过滤即输即得。"
                                </p>
                            </div>
                        </div>
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <div class="w-12 h-12 bg-secondary rounded-lg flex items-center justify-center text-secondary-content mb-2">
                                    <BarChart3 attr:class="h-6 w-6" />
                                </div>
                                <h3 class="card-title">"实时报表"</h3>
                                <p class="text-base-content/70">
                                    "库存总值、低库存预警、类别分布，自动定时刷新。"
                                </p>
                            </div>
                        </div>
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <div class="w-12 h-12 bg-accent rounded-lg flex items-center justify-center text-accent-content mb-2">
                                    <ShieldCheck attr:class="h-6 w-6" />
                                </div>
                                <h3 class="card-title">"角色权限"</h3>
                                <p class="text-base-content/70">
                                    "管理员与普通用户各司其职，写操作双重校验。"
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
