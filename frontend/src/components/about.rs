//! 关于页（静态内容）

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h1 class="card-title text-2xl">"关于系统"</h1>
                    <p class="text-base-content/70">"IMS 库存管理系统"</p>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">"系统概述"</h2>
                    <p class="text-base-content/80">
                        "IMS 是一套面向中小团队的库存管理系统：商品的增删改查、"
                        "基于角色的访问控制、以及随库存变动实时更新的统计报表。"
                        "前端为单页应用，数据全部来自 REST 后端。"
                    </p>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">"核心功能"</h2>
                    <ul class="list-disc list-inside space-y-1 text-base-content/80">
                        <li>"商品管理：创建、编辑、删除与搜索"</li>
                        <li>"仪表盘：商品总数、库存总值、低库存预警"</li>
                        <li>"报表：价值排名、状态与类别分布、定时自动刷新"</li>
                        <li>"权限：管理员 / 普通用户两级角色"</li>
                        <li>"主题：亮色 / 暗色一键切换"</li>
                    </ul>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">"系统信息"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-2 text-sm text-base-content/80">
                        <div>
                            <span class="font-semibold">"版本："</span>
                            "0.1.0"
                        </div>
                        <div>
                            <span class="font-semibold">"接口："</span>
                            "REST / JSON"
                        </div>
                        <div>
                            <span class="font-semibold">"认证："</span>
                            "Bearer Token"
                        </div>
                        <div>
                            <span class="font-semibold">"角色："</span>
                            "ADMIN / USER"
                        </div>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">"联系与支持"</h2>
                    <p class="text-base-content/80">
                        "使用问题请联系系统管理员；操作指南见站内帮助。"
                    </p>
                </div>
            </div>
        </div>
    }
}
