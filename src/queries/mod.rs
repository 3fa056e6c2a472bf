pub mod producto_queries;
