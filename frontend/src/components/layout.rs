//! 认证页面的共用布局
//!
//! 顶栏（菜单按钮 / 主题切换 / 用户名 / 退出）+ 按权限过滤的侧边导航。
//! 侧边导航五项与权限一一对应，角色变化时自动显隐。

use crate::auth::{logout, use_auth};
use crate::components::icons::*;
use crate::theme::use_theme;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use ims_shared::Permission;
use leptos::prelude::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let theme = use_theme();
    let router = use_router();
    let (sidebar_open, set_sidebar_open) = signal(false);

    let username = move || {
        auth.state
            .get()
            .user()
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };

    // 点击导航项：收起移动端侧栏再导航
    let nav_to = move |path: &'static str| {
        move |_| {
            set_sidebar_open.set(false);
            router.navigate(path);
        }
    };

    let link_class = move |route: AppRoute| {
        move || {
            if router.current_route().get() == route {
                "active"
            } else {
                ""
            }
        }
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-md sticky top-0 z-40">
                <div class="flex-1 gap-2">
                    <button
                        class="btn btn-ghost btn-square lg:hidden"
                        on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
                    >
                        <Menu attr:class="h-6 w-6" />
                    </button>
                    <Package attr:class="text-primary h-6 w-6" />
                    <a class="btn btn-ghost text-xl" on:click=nav_to("/dashboard")>
                        "IMS 库存管理"
                    </a>
                </div>
                <div class="flex-none gap-2">
                    <button class="btn btn-ghost btn-circle" on:click=move |_| theme.toggle()>
                        <Show
                            when=move || theme.theme.get().is_dark()
                            fallback=|| view! { <Moon attr:class="h-5 w-5" /> }
                        >
                            <Sun attr:class="h-5 w-5" />
                        </Show>
                    </button>
                    <span class="badge badge-neutral hidden md:inline-flex">{username}</span>
                    <button on:click=move |_| logout(&auth) class="btn btn-outline btn-error btn-sm gap-2">
                        <LogOut attr:class="h-4 w-4" /> "退出"
                    </button>
                </div>
            </div>

            <div class="flex">
                <aside class=move || {
                    if sidebar_open.get() {
                        "bg-base-100 w-56 p-4 shadow-md min-h-screen fixed lg:static z-30"
                    } else {
                        "bg-base-100 w-56 p-4 shadow-md min-h-screen hidden lg:block"
                    }
                }>
                    <ul class="menu gap-1">
                        <Show when=move || auth.has_permission(Permission::ViewDashboard)>
                            <li>
                                <a class=link_class(AppRoute::Dashboard) on:click=nav_to("/dashboard")>
                                    <House attr:class="h-5 w-5" />
                                    "仪表盘"
                                </a>
                            </li>
                        </Show>
                        <Show when=move || auth.has_permission(Permission::ViewProducts)>
                            <li>
                                <a class=link_class(AppRoute::Products) on:click=nav_to("/products")>
                                    <Package attr:class="h-5 w-5" />
                                    "商品管理"
                                </a>
                            </li>
                        </Show>
                        <Show when=move || auth.has_permission(Permission::CreateProducts)>
                            <li>
                                <a class=link_class(AppRoute::ProductAdd) on:click=nav_to("/products/add")>
                                    <Plus attr:class="h-5 w-5" />
                                    "新增商品"
                                </a>
                            </li>
                        </Show>
                        <Show when=move || auth.has_permission(Permission::ViewReports)>
                            <li>
                                <a class=link_class(AppRoute::Reports) on:click=nav_to("/reports")>
                                    <BarChart3 attr:class="h-5 w-5" />
                                    "报表分析"
                                </a>
                            </li>
                        </Show>
                        <Show when=move || auth.has_permission(Permission::ViewAbout)>
                            <li>
                                <a class=link_class(AppRoute::About) on:click=nav_to("/about")>
                                    <Info attr:class="h-5 w-5" />
                                    "关于系统"
                                </a>
                            </li>
                        </Show>
                    </ul>
                </aside>

                <main class="flex-1 p-4 md:p-8">{children()}</main>
            </div>
        </div>
    }
}
