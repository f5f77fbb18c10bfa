//! 登录页
//!
//! 提交凭据换取会话。成功后的跳转不在这里做：路由服务监听
//! 认证信号，翻转后自动重定向到仪表盘。

use crate::auth::{login, use_auth};
use crate::components::icons::ShieldCheck;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if username.get().trim().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("请输入用户名和密码".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            // 失败的提示由认证模块负责；跳转由路由服务完成
            let _ = login(&auth, username.get_untracked(), password.get_untracked()).await;
            set_is_submitting.set(false);
        });
    };

    // 演示账号一键填充
    let fill_admin = move |_| {
        set_username.set("admin".to_string());
        set_password.set("admin123".to_string());
    };
    let fill_user = move |_| {
        set_username.set("user".to_string());
        set_password.set("user123".to_string());
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"IMS 库存管理"</h1>
                        <p class="text-base-content/70">"登录以管理您的库存"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"用户名"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="admin"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || {
                                    if is_submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "登录中..."
                                        }
                                            .into_any()
                                    } else {
                                        "登录".into_any()
                                    }
                                }}
                            </button>
                        </div>

                        // 演示账号提示（与后端初始化数据一致）
                        <div class="divider text-xs text-base-content/50">"演示账号"</div>
                        <div class="flex gap-2 justify-center">
                            <button type="button" class="btn btn-ghost btn-xs" on:click=fill_admin>
                                "管理员 admin / admin123"
                            </button>
                            <button type="button" class="btn btn-ghost btn-xs" on:click=fill_user>
                                "用户 user / user123"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
