use uuid::Uuid;

pub trait ObjectWithUUID {
    fn uuid(&self) -> &Uuid;

    fn same_object<T: ObjectWithUUID>(&self, other: &T) -> bool where Self: Sized {
        self.uuid() == other.uuid()
    }
}
