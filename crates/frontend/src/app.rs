use crate::routes::routes::AppRoutes;
use crate::shared::notice::{NoticeHost, NoticeService};
use crate::shared::reference_data::ReferenceData;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // City and facility lists are shared by every page of the session.
    provide_context(ReferenceData::new());

    provide_context(NoticeService::new());

    view! {
        <ConfigProvider>
            <SessionProvider>
                <AppRoutes />
                <NoticeHost />
            </SessionProvider>
        </ConfigProvider>
    }
}
