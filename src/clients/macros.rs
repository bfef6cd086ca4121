/// Generates an async client method that sends one `GymRequest` variant and
/// awaits its oneshot reply.
///
/// Parameters listed in `skip(..)` stay out of the span; `fields(..)` adds
/// summary fields in their place. Channel failures surface as
/// [`GymError::ActorCommunication`](crate::error::GymError).
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        client_method!($client => fn $method($($param: $param_type),*) -> $return_type as $request::$variant, skip());
    };
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, skip($($skipped:ident),*) $(, fields($($field:tt)*))?) => {
        impl $client {
            #[tracing::instrument(skip(self $(, $skipped)*) $(, fields($($field)*))?)]
            pub async fn $method(&self, $($param: $param_type),*) -> $crate::error::GymResult<$return_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| $crate::error::GymError::ActorCommunication("Service closed".to_string()))?;

                response
                    .await
                    .map_err(|_| $crate::error::GymError::ActorCommunication("Service dropped reply".to_string()))?
            }
        }
    };
}
