pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 注册缓存插件的宏
///
/// 在模块加载时通过 ctor 将构造函数注册到全局缓存插件表。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ident) => {
        paste::paste! {
            #[ctor::ctor]
            #[allow(non_snake_case)]
            fn [<__register_object_cache_ $plugin>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            let plugin = <$plugin>::new().map_err(|e| {
                                $crate::errors::CourseMarketError::cache_connection(e)
                            })?;
                            Ok(Box::new(plugin) as Box<dyn $crate::cache::ObjectCache>)
                        })
                    }),
                );
            }
        }
    };
}
