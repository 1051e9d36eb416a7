mod aabb_plane;
mod aabb_triangle;
mod concurrent_queries;
mod segment_triangle;
mod sphere_aabb;
