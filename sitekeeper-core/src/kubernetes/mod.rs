use kube::{Api, Client, Resource};

pub mod operations;

pub trait GetApi {
    fn global_api<K>(&self) -> Api<K>
    where
        K: Resource<DynamicType = ()>;
}

impl GetApi for Client {
    fn global_api<K>(&self) -> Api<K>
    where
        K: Resource<DynamicType = ()>,
    {
        Api::all(self.clone())
    }
}
