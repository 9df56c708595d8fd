use leptos::*;

use super::toast::ToastViewport;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <a href="/" class="text-xl font-semibold text-gray-900">
                            "HRMS Lite"
                        </a>
                    </div>
                    <nav class="flex space-x-4">
                        <a href="/" class="text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100">
                            "Dashboard"
                        </a>
                        <a href="/employees" class="text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100">
                            "Employees"
                        </a>
                        <a href="/attendance" class="text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100">
                            "Attendance"
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
            <ToastViewport/>
        </div>
    }
}

#[component]
pub fn LoadingIndicator(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center h-64 gap-3">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
            <p class="text-sm text-gray-500">{label}</p>
        </div>
    }
}
