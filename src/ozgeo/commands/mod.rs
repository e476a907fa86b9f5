pub mod compare;
pub mod geoids;
pub mod trim;
