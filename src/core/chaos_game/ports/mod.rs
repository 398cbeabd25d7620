pub mod point_sink;
